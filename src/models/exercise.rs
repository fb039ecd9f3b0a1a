use serde::Serialize;

/// Label of the dedicated calorie action; the only kind measured in calories.
pub const CALORIE_INTAKE: &str = "Calorie Intake";

/// Home screen tiles shipped with the default configuration.
pub const DEFAULT_EXERCISES: [&str; 10] = [
    "Push-ups", "Squats", "Pull-ups", "Curls", "Lunges", "Plank", "Sit Ups", "Crunches",
    "Burpees", "Chin Ups",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    Reps,
    Calories,
}

impl Unit {
    pub fn for_kind(kind: &str) -> Self {
        if kind == CALORIE_INTAKE {
            Unit::Calories
        } else {
            Unit::Reps
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Reps => "reps",
            Unit::Calories => "calories",
        }
    }
}

/// Title of the input dialog opened for `kind`.
pub fn dialog_title(kind: &str) -> String {
    if kind == CALORIE_INTAKE {
        "Enter calorie intake".to_string()
    } else {
        format!("Enter {kind} count")
    }
}

/// Label of the dialog's text field.
pub fn input_label(kind: &str) -> String {
    if kind == CALORIE_INTAKE {
        "Calories".to_string()
    } else {
        format!("Number of {kind}")
    }
}

/// The fixed menu of exercises shown as numbered tiles on the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    exercises: Vec<String>,
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::new(DEFAULT_EXERCISES.iter().map(|s| s.to_string()).collect())
    }
}

impl Catalogue {
    pub fn new(exercises: Vec<String>) -> Self {
        Self { exercises }
    }

    pub fn exercises(&self) -> &[String] {
        &self.exercises
    }

    /// Tiles as (1-based number, name).
    pub fn tiles(&self) -> impl Iterator<Item = (usize, &str)> {
        self.exercises
            .iter()
            .enumerate()
            .map(|(i, name)| (i + 1, name.as_str()))
    }

    /// Resolve user input to a label: a tile number, an exercise name
    /// (case-insensitive) or the calorie action.
    pub fn resolve(&self, query: &str) -> Option<&str> {
        let q = query.trim();
        if q.is_empty() {
            return None;
        }

        if let Ok(n) = q.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(|i| self.exercises.get(i))
                .map(String::as_str);
        }

        if q.eq_ignore_ascii_case(CALORIE_INTAKE) || q.eq_ignore_ascii_case("calories") {
            return Some(CALORIE_INTAKE);
        }

        self.exercises
            .iter()
            .find(|name| name.eq_ignore_ascii_case(q))
            .map(String::as_str)
    }
}
