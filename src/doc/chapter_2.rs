/*!
# Instruction Reference

`a` is the first value popped and `b` is the second. Every pop and push
happens on the end chosen by the word's `!`.

| Word    | Pops   | Pushes       |
|---------|--------|--------------|
| `add`   | a b    | a+b          |
| `sub`   | a b    | b-a          |
| `dup`   | a      | a a          |
| `swap`  | a b    | a b          |
| `move`  | a      | a, other end |
| `over`  | a b    | b a b        |
| `drop`  | a      |              |
| `shr`   | a b    | b>>a         |
| `shl`   | a b    | b<<a         |
| `eq`    | a b    | a=b          |
| `or`    | a b    | a\|b         |
| `and`   | a b    | a&b          |
| `>`     | a b    | a>b          |
| `<`     | a b    | a<b          |
| `>=`    | a b    | a>=b         |
| `jmpif` | addr c | jumps if c   |
| `jmp`   | addr   | jumps        |
| `print` | a      | prints a     |

Note that comparisons put the first popped value on the left. `1! 2! >!`
asks whether 2 is greater than 1.

`exit` and `trace` do not touch the deque and need no `!`. `exit` ends the
program at once. `trace` prints one character per value, `*` for a value
equal to 1 and a space for anything else.

## Jumps

The popped address is absolute. The next word to run is the word at that
address. Jumping to an address past the end ends the program normally.
Jumping to a negative address is `INVALID ADDRESS`.

*/
