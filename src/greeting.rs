//! Greetings: a pure formatting function, a named value object, and a
//! greeting capability bound to its owner at construction time.

/// Formats `name` into the fixed greeting template.
///
/// Pure and total. An empty name is the caller's business; nothing here
/// enforces the non-empty convention.
pub fn greet(name: &str) -> String {
    format!("Bonjour, {name}!")
}

/// An immutable named user that greets in its own name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        User { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The user's own greeting.
    pub fn greeting(&self) -> String {
        format!("Salut, {}", self.name)
    }

    /// A detached greeting capability.
    ///
    /// The closure stores its own copy of the owner, so the binding is
    /// permanent: it keeps producing the same greeting after this `User`
    /// moves or drops, and no call site can rebind it.
    pub fn greeter(&self) -> impl Fn() -> String + 'static {
        let owner = self.clone();
        move || owner.greeting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_formats_the_fixed_template() {
        assert_eq!(greet("Eric"), "Bonjour, Eric!");
    }

    #[test]
    fn test_user_greets_in_its_own_name() {
        let user = User::new("Ethan");
        assert_eq!(user.name(), "Ethan");
        assert_eq!(user.greeting(), "Salut, Ethan");
    }

    #[test]
    fn test_greeter_matches_the_owners_greeting() {
        let user = User::new("Léa");
        let greeter = user.greeter();
        assert_eq!(greeter(), user.greeting());
    }

    #[test]
    fn test_greeter_stays_bound_after_the_owner_drops() {
        let greeter = {
            let user = User::new("Ethan");
            user.greeter()
            // `user` drops here; the capability carries its own copy
        };
        assert_eq!(greeter(), "Salut, Ethan");
    }

    #[test]
    fn test_greeters_from_different_users_do_not_interfere() {
        let first = User::new("Eric").greeter();
        let second = User::new("Ethan").greeter();
        assert_eq!(first(), "Salut, Eric");
        assert_eq!(second(), "Salut, Ethan");
        assert_eq!(first(), "Salut, Eric");
    }
}
