use crate::model::{Dataset, PageId, UserId};
use std::fmt;

pub struct DatasetReport<'a>(pub &'a Dataset);

impl fmt::Display for DatasetReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Users and Their Connections:")?;
        writeln!(f)?;
        for user in &self.0.users {
            writeln!(
                f,
                "{} (ID: {}) - Friends: {} - Liked Pages: {}",
                user.name,
                user.id,
                ListFmt(&user.friends),
                ListFmt(&user.liked_pages)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Pages:")?;
        writeln!(f)?;
        for page in &self.0.pages {
            writeln!(f, "{}: {}", page.id, page.name)?;
        }
        Ok(())
    }
}

pub struct RecommendationReport<'a> {
    pub user: UserId,
    pub friends: &'a [UserId],
    pub pages: &'a [PageId],
}

impl fmt::Display for RecommendationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "People You May Know for User {}: {}",
            self.user,
            ListFmt(self.friends)
        )?;
        writeln!(
            f,
            "Pages You Might Like for User {}: {}",
            self.user,
            ListFmt(self.pages)
        )
    }
}

// [a, b, c]
struct ListFmt<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for ListFmt<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
