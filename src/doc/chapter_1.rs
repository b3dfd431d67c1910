/*!
# Words, Directions, and Labels

## Source text

Source is split into lines. A line whose first non-blank character is `#`
is a comment and is ignored completely. Every other line is split on the
space character. Runs of spaces count as one separator. Tabs are not
separators, so `1!<TAB>2!` is a single word.

Words are numbered from 0 across the whole file. That number is the
address of the word and it is what labels refer to.

## Directions

| Word   | End   | Opcode |
|--------|-------|--------|
| `!add` | left  | `add`  |
| `add!` | right | `add`  |
| `add`  | none  | `add`  |

The leading form wins, so `!x!` is the word `x!` on the left end.

## Labels

`name:` defines the label `name` at its own address. It does nothing when
it runs. A second definition of the same name stops the program before
anything runs.

<pre><code>&nbsp;  <b>ERROR: DUPLICATE LABEL AT 1 (`a:`); LABEL `a` ALREADY DEFINED AT 0</b>
</code></pre>

A word that is not an opcode is a value. If it reads as a decimal integer,
with an optional leading `+` or `-`, it is pushed as that integer. Digit
separators are not accepted: `1_000!` is looked up as a label and fails
with `UNDEFINED LABEL`. Otherwise it must be a label, and its address
is pushed.

## Values

Values are 64-bit signed integers or booleans. Comparisons produce
booleans. A boolean used with a number counts as 1 or 0. Arithmetic that
leaves the 64-bit range stops the program with `OVERFLOW`.

*/
