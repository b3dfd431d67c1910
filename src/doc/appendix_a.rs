/*!
# Error Messages

Every error stops the program. The message names the address and the word
that failed. The process exits with status 1, or 130 after CTRL-C.

| Message                | Cause                                        |
|------------------------|----------------------------------------------|
| `DUPLICATE LABEL`      | Two `name:` words share a name.              |
| `UNDEFINED LABEL`      | A word is not an opcode, integer, or label.  |
| `DIRECTION REQUIRED`   | A word used the deque without a `!`.         |
| `STACK UNDERFLOW`      | A pop found the deque empty.                 |
| `OVERFLOW`             | A result left the 64-bit integer range.      |
| `NEGATIVE SHIFT COUNT` | `shl` or `shr` was asked to shift by less than 0. |
| `INVALID ADDRESS`      | A jump popped a negative address.            |
| `OUT OF MEMORY`        | The deque grew past 16777216 values.         |
| `BREAK`                | CTRL-C.                                      |
| `FILE NOT FOUND`       | The source path does not exist.              |
| `I/O ERROR`            | The source could not be read or output failed. |

Running without a path prints `ERROR: no file path is provided` and exits
with status 1.

*/
