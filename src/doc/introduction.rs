/*!
# Introductory Tutorial for Deque

A deque program is a text file of words separated by spaces. There is one
piece of memory, a double-ended queue of integers and booleans, and every
word either pushes something onto it, pops something off it, or moves the
instruction pointer. Run a program by giving its path.

<pre><code>&nbsp;$ deque hello.dq
</code></pre>

Let's add two numbers. Put this in `add.dq`.

```text
# push 5 and 3 on the right, add them, print the sum
5! 3! add! print!
```

<pre><code>&nbsp;$ deque add.dq
&nbsp;  8
</code></pre>

The `!` after each word says which end of the deque the word works on.
A trailing `!` means the right end. A leading `!` means the left end.
The same program works entirely on the left end.

```text
!5 !3 !add !print
```

Words that touch the deque without a `!` are errors. The program stops
and reports where it stopped.

<pre><code>&nbsp;$ deque bad.dq
&nbsp;  <b>ERROR: DIRECTION REQUIRED AT 2 (`add`)</b>
</code></pre>

Loops are built from labels and jumps. A word ending in `:` names its own
position in the program. Using the name pushes that position, which
`jmp` and `jmpif` pop as a destination. This program counts down from 3.

```text
3!
loop:
  dup! print!
  1! sub!
  dup! 0! <! loop! jmpif!
exit
```

<pre><code>&nbsp;$ deque countdown.dq
&nbsp;  3
&nbsp;  2
&nbsp;  1
</code></pre>

Stop a running program with CTRL-C. Add `--trace` to see every word run
along with the deque as it was just before.

<pre><code>&nbsp;$ deque --trace add.dq
&nbsp;  0: 5! <- []
&nbsp;  1: 3! <- [5]
&nbsp;  2: add! <- [5, 3]
&nbsp;  3: print! <- [8]
&nbsp;  8
&nbsp;  []
</code></pre>

The remainder of this manual is reference material.

*/
