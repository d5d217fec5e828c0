//! Common pattern reference list

use super::CommonPattern;

const fn entry(name: &'static str, pattern: &'static str) -> CommonPattern {
    CommonPattern { name, pattern }
}

pub fn all_patterns() -> Vec<CommonPattern> {
    vec![
        entry("Email", r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"),
        entry("URL", r"https?://[\w.-]+\.[\w]{2,}(?:/[\w./-]*)?"),
        entry("Phone Number (US)", r"^(\+0?1\s)?\(?\d{3}\)?[\s.-]\d{3}[\s.-]\d{4}$"),
        entry("Date (MM/DD/YYYY)", r"\d{1,2}/\d{1,2}/\d{4}"),
        entry("IP Address", r"\b(?:\d{1,3}\.){3}\d{1,3}\b"),
        entry("HTML Tag", "<[^>]+>"),
        entry("Password Strength", r"^(?=.*[A-Z])(?=.*[a-z])(?=.*\d)(?=.*[!@#$%^&*]).{8,}$"),
    ]
}
