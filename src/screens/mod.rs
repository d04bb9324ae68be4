pub mod home;
pub mod tasks;

/// Named destinations for in-app navigation. Assigning a new value on the
/// app struct is the whole routing mechanism; the navigator carries no
/// state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Tasks,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Tasks => "Your Tasks",
        }
    }
}
