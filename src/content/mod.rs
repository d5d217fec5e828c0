//! Tutorial content
//!
//! Lessons, practice challenges and the common-pattern reference list.
//! Everything here is built once at startup and only ever read.

mod challenges;
mod lessons;
mod patterns;

/// A worked example inside a lesson
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonExample {
    pub pattern: &'static str,
    pub test_string: &'static str,
    pub explanation: &'static str,
}

/// A lesson page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub title: &'static str,
    pub content: &'static str,
    pub examples: Vec<LessonExample>,
}

/// A practice challenge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub test_string: &'static str,
    pub solution: &'static str,
    pub hint: &'static str,
}

/// An entry in the common-pattern reference list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPattern {
    pub name: &'static str,
    pub pattern: &'static str,
}

/// Read-only collection of all tutorial content
pub struct Catalog {
    lessons: Vec<Lesson>,
    challenges: Vec<Challenge>,
    patterns: Vec<CommonPattern>,
}

impl Catalog {
    /// Load the built-in content
    pub fn builtin() -> Self {
        Self {
            lessons: lessons::all_lessons(),
            challenges: challenges::all_challenges(),
            patterns: patterns::all_patterns(),
        }
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn lesson(&self, index: usize) -> Option<&Lesson> {
        self.lessons.get(index)
    }

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    /// Look up a challenge by its id
    pub fn challenge(&self, id: u32) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id == id)
    }

    pub fn patterns(&self) -> &[CommonPattern] {
        &self.patterns
    }

    pub fn pattern(&self, index: usize) -> Option<&CommonPattern> {
        self.patterns.get(index)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{compile, evaluate, FlagSet, PatternSpec};

    fn global(source: &str) -> PatternSpec {
        PatternSpec::new(source, FlagSet::parse("g").unwrap())
    }

    #[test]
    fn test_catalog_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.lessons().len(), 7);
        assert_eq!(catalog.challenges().len(), 5);
        assert_eq!(catalog.patterns().len(), 7);
        assert!(catalog.lessons().iter().all(|l| !l.examples.is_empty()));
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.challenge(3).unwrap().title, "Match HTML Tags");
        assert!(catalog.challenge(0).is_none());
        assert_eq!(catalog.lesson(0).unwrap().title, "Introduction to Regular Expressions");
        assert!(catalog.lesson(7).is_none());
        assert_eq!(catalog.pattern(5).unwrap().name, "HTML Tag");
    }

    #[test]
    fn test_every_pattern_compiles() {
        let catalog = Catalog::builtin();
        let sources = catalog
            .lessons()
            .iter()
            .flat_map(|l| l.examples.iter().map(|e| e.pattern))
            .chain(catalog.challenges().iter().map(|c| c.solution))
            .chain(catalog.patterns().iter().map(|p| p.pattern));
        for source in sources {
            assert!(compile(&global(source)).is_ok(), "failed to compile {}", source);
        }
    }

    #[test]
    fn test_lesson_examples_match() {
        let catalog = Catalog::builtin();
        for lesson in catalog.lessons() {
            for example in &lesson.examples {
                let result = evaluate(&global(example.pattern), example.test_string).unwrap();
                assert!(result.matched, "{} should match {:?}", example.pattern, example.test_string);
            }
        }
    }

    #[test]
    fn test_challenge_solutions_match() {
        let catalog = Catalog::builtin();
        let counts: Vec<usize> = catalog
            .challenges()
            .iter()
            .map(|c| evaluate(&global(c.solution), c.test_string).unwrap().matches.len())
            .collect();
        assert_eq!(counts, vec![9, 2, 6, 2, 2]);
    }
}
