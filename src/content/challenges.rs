//! Practice challenges

use super::Challenge;

/// All challenges, ordered by id
pub fn all_challenges() -> Vec<Challenge> {
    vec![
        Challenge {
            id: 1,
            title: "Match All Digits",
            description: "Write a pattern that matches all digits in the test string.",
            test_string: "The price is $42.99 for item #12345.",
            solution: "[0-9]",
            hint: "Use a character class for digits.",
        },
        Challenge {
            id: 2,
            title: "Match Email Addresses",
            description: "Create a pattern that matches valid email addresses.",
            test_string: "Contact us at support@example.com or info@company.org.",
            solution: r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}",
            hint: "Break it down: username @ domain . TLD",
        },
        Challenge {
            id: 3,
            title: "Match HTML Tags",
            description: "Write a pattern that matches HTML tags.",
            test_string: "<div>This is a <b>bold</b> statement in a <p>paragraph</p>.</div>",
            solution: "<[^>]+>",
            hint: "Look for text between < and >",
        },
        Challenge {
            id: 4,
            title: "Match URLs",
            description: "Create a pattern that matches URLs in the text.",
            test_string: "Visit our website at https://www.example.com or http://subdomain.example.org/page.",
            solution: r"https?://[\w.-]+\.[\w]{2,}(?:/[\w./-]*)?",
            hint: "Consider http vs https and the domain structure",
        },
        Challenge {
            id: 5,
            title: "Extract Quoted Text",
            description: "Write a pattern that extracts text between double quotes.",
            test_string: r#"She said "hello" and he replied "goodbye"."#,
            solution: r#""([^"]*)""#,
            hint: "Use a capturing group between quote marks",
        },
    ]
}
