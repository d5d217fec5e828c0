//! Built-in lessons

use super::{Lesson, LessonExample};

const fn example(
    pattern: &'static str,
    test_string: &'static str,
    explanation: &'static str,
) -> LessonExample {
    LessonExample {
        pattern,
        test_string,
        explanation,
    }
}

/// All lessons, in teaching order
pub fn all_lessons() -> Vec<Lesson> {
    vec![
        Lesson {
            title: "Introduction to Regular Expressions",
            content: "Regular expressions (regex) are patterns used to match character \
                      combinations in strings. They are incredibly powerful for text \
                      processing and validation.",
            examples: vec![
                example("hello", "hello world", "Matches the literal text \"hello\""),
                example("a|b", "abc", "Matches either \"a\" or \"b\""),
            ],
        },
        Lesson {
            title: "Basic Patterns",
            content: "The simplest patterns match literal text. For example, the pattern \
                      'hello' will match the string 'hello'.",
            examples: vec![
                example("cat", "The cat sat on the mat.", "Matches the literal word \"cat\""),
                example("dog|cat", "I have a dog and a cat.", "Matches either \"dog\" or \"cat\""),
            ],
        },
        Lesson {
            title: "Character Classes",
            content: "Character classes match any one character from a set of characters.",
            examples: vec![
                example("[aeiou]", "apple", "Matches any vowel"),
                example("[0-9]", "The code is 1234", "Matches any digit"),
            ],
        },
        Lesson {
            title: "Quantifiers",
            content: "Quantifiers specify how many instances of a character or group must \
                      be present.",
            examples: vec![
                example("a+", "aaa apple banana", "Matches one or more \"a\" characters"),
                example(
                    "go*d",
                    "gd god goood",
                    "Matches \"g\" followed by zero or more \"o\" characters, followed by \"d\"",
                ),
            ],
        },
        Lesson {
            title: "Anchors",
            content: "Anchors match positions rather than characters.",
            examples: vec![
                example(
                    "^start",
                    "start of line\nnot at start",
                    "Matches \"start\" only at the beginning of a line",
                ),
                example("end$", "at the end\nend", "Matches \"end\" only at the end of a line"),
            ],
        },
        Lesson {
            title: "Groups and Capturing",
            content: "Groups allow you to apply quantifiers to entire patterns. They also \
                      capture the matched text for later use.",
            examples: vec![
                example("(ab)+", "ababab", "Matches one or more occurrences of the sequence \"ab\""),
                example(
                    r"(\w+)@(\w+)\.com",
                    "contact@example.com",
                    "Captures username and domain in an email address",
                ),
            ],
        },
        Lesson {
            title: "Lookahead and Lookbehind",
            content: "Lookahead and lookbehind assertions match text based on what follows \
                      or precedes it, without including that text in the match.",
            examples: vec![
                example("foo(?=bar)", "foobar", "Matches \"foo\" only if followed by \"bar\""),
                example(
                    r"(?<=\$)\d+",
                    "Price: $25",
                    "Matches digits only if preceded by a \"$\" sign",
                ),
            ],
        },
    ]
}
