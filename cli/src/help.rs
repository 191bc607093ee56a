pub const CHECK_LONG_HELP: &str = r#"Check that files contain valid Hyperscan patterns

Each file must contain one pattern per line. Blank lines and lines starting
with `#` are ignored. Every other line is handed to the Hyperscan pattern
compiler as-is, and the compiler's diagnostic is printed for each rejected
pattern.

If <PATTERNS_PATH> is a directory, all the files in it will be checked. This
behavior can be changed by using the `--filter` and `--recursive` options.

If <PATTERNS_PATH> is `-`, patterns are read from stdin."#;

pub const COMPLETION_LONG_HELP: &str = r#"Output shell completion code for the specified shell

Examples:

hscheck completion bash > $(brew --prefix)/etc/bash_completion.d/hscheck
hscheck completion zsh > "${fpath[1]}/_hscheck""#;

pub const FILTER_LONG_HELP: &str = r#"Only check files that match the given pattern

Patterns can contains the following wildcards:

?      matches any single character.

*      matches any sequence of characters, except the path separator.

**     matches any sequence of characters, including the path separator.

[...]  matches any character inside the brackets. Can also specify ranges of
       characters (e.g. [0-9], [a-z])

[!...] is the negation of [...]

This option can be used more than once with different patterns. In such cases
files matching any of the patterns will be checked.

When no filter is specified, all the files in <PATTERNS_PATH> are checked."#;

pub const RECURSIVE_LONG_HELP: &str = r#"Walk directories recursively

When <PATTERNS_PATH> is a directory, this option enables recursive directory traversal.
You can optionally specify a <MAX_DEPTH> to limit how deep the traversal goes:

--recursive     process nested subdirectories with no limits.
--recursive=0   process only the files in <PATTERNS_PATH> (no subdirectories)
--recursive=3   process up to 3 levels deep, including nested subdirectories

If --recursive is not specified, the default behavior is equivalent to --recursive=0.

Examples:

--recursive
--recursive=3"#;
