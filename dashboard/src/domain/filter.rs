//! Search filtering over a fetched user collection.

use super::User;

/// Return the users whose name or e-mail contains `query`, ignoring case.
///
/// An empty query selects every user. Source order is preserved and nothing
/// is ranked. The query is used as typed: surrounding whitespace is part of
/// the needle.
///
/// # Examples
/// ```
/// use user_dashboard::domain::{filter_users, User};
///
/// let users = vec![
///     User { name: "Leanne Graham".into(), email: "Sincere@april.biz".into(), ..User::default() },
///     User { name: "Ervin Howell".into(), email: "Shanna@melissa.tv".into(), ..User::default() },
/// ];
/// let matched = filter_users(&users, "APRIL");
/// assert_eq!(matched.len(), 1);
/// assert_eq!(matched[0].name, "Leanne Graham");
/// ```
#[must_use]
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    if query.is_empty() {
        return users.iter().collect();
    }

    let needle = query.to_lowercase();
    users
        .iter()
        .filter(|user| matches_needle(user, &needle))
        .collect()
}

fn matches_needle(user: &User, needle: &str) -> bool {
    user.name.to_lowercase().contains(needle) || user.email.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use rstest::{fixture, rstest};

    fn user(id: i64, name: &str, email: &str) -> User {
        User {
            id: Some(UserId::new(id)),
            name: name.to_owned(),
            email: email.to_owned(),
            ..User::default()
        }
    }

    #[fixture]
    fn directory() -> Vec<User> {
        vec![
            user(1, "Leanne Graham", "Sincere@april.biz"),
            user(2, "Ervin Howell", "Shanna@melissa.tv"),
            user(3, "Clementine Bauch", "Nathan@yesenia.net"),
            user(4, "Patricia Lebsack", "Julianne.OConner@kory.org"),
        ]
    }

    fn ids(users: &[&User]) -> Vec<i64> {
        users
            .iter()
            .filter_map(|user| user.id.map(UserId::get))
            .collect()
    }

    #[rstest]
    fn empty_query_returns_whole_collection_in_order(directory: Vec<User>) {
        assert_eq!(ids(&filter_users(&directory, "")), vec![1, 2, 3, 4]);
    }

    #[rstest]
    #[case::name_lowercase("leanne", vec![1])]
    #[case::name_uppercase("HOWELL", vec![2])]
    #[case::email_only("melissa", vec![2])]
    #[case::name_or_email("an", vec![1, 2, 3, 4])]
    #[case::mid_word("ment", vec![3])]
    #[case::no_match("xyz", vec![])]
    #[case::whitespace_is_significant(" graham", vec![1])]
    #[case::leading_whitespace_without_match("  leanne", vec![])]
    fn matches_name_or_email_case_insensitively(
        directory: Vec<User>,
        #[case] query: &str,
        #[case] expected: Vec<i64>,
    ) {
        assert_eq!(ids(&filter_users(&directory, query)), expected);
    }

    #[rstest]
    fn other_fields_are_not_searched(directory: Vec<User>) {
        let mut with_extras = directory;
        with_extras[0].username = "Bret".to_owned();
        with_extras[0].company.name = "Romaguera-Crona".to_owned();

        assert!(filter_users(&with_extras, "bret").is_empty());
        assert!(filter_users(&with_extras, "romaguera").is_empty());
    }

    #[rstest]
    #[case("")]
    #[case("a")]
    #[case("org")]
    #[case("nothing")]
    fn result_is_exactly_the_matching_subset(directory: Vec<User>, #[case] query: &str) {
        let matched = filter_users(&directory, query);
        let needle = query.to_lowercase();
        for candidate in &directory {
            let expected = candidate.name.to_lowercase().contains(&needle)
                || candidate.email.to_lowercase().contains(&needle);
            let included = matched.iter().any(|user| std::ptr::eq(*user, candidate));
            assert_eq!(included, expected, "membership of {}", candidate.name);
        }
    }

    #[rstest]
    #[case("")]
    #[case("e")]
    #[case("kory")]
    fn filtering_is_idempotent(directory: Vec<User>, #[case] query: &str) {
        let once: Vec<User> = filter_users(&directory, query)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_users(&once, query);
        assert_eq!(twice.into_iter().cloned().collect::<Vec<_>>(), once);
    }

    #[test]
    fn empty_collection_yields_nothing() {
        assert!(filter_users(&[], "anything").is_empty());
        assert!(filter_users(&[], "").is_empty());
    }
}
