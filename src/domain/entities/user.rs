//! Domain entity representing a stored user.

/// Age from which a user counts as an adult.
pub const ADULT_AGE: i64 = 18;

/// A user record as held by the repository.
///
/// Identity is `id`, assigned by the caller on creation. Records are only
/// ever created or deleted, never updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let user = User::new(1, "Naruto".to_string(), 10);
    /// ```
    pub fn new(id: i64, name: String, age: i64) -> Self {
        Self { id, name, age }
    }

    /// Whether the user has reached [`ADULT_AGE`].
    pub fn is_of_age(&self) -> bool {
        self.age >= ADULT_AGE
    }
}
