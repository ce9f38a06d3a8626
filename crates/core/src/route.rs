//! Page routes.

use crate::catalog::{find_by_path, LessonInfo};

/// A page the presentation layer can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Learn,
    Lesson(&'static LessonInfo),
    NotFound,
}

impl Route {
    /// Resolve a path such as `/storageone`.
    ///
    /// A trailing slash is ignored. Unknown paths resolve to `NotFound`.
    pub fn resolve(path: &str) -> Self {
        let path = path.trim();
        let normalized = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };

        match normalized {
            "/" => Self::Home,
            "/learn" => Self::Learn,
            p => find_by_path(p).map_or(Self::NotFound, Self::Lesson),
        }
    }

    /// Canonical path of this route. `NotFound` has none.
    pub fn path(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some("/"),
            Self::Learn => Some("/learn"),
            Self::Lesson(info) => Some(info.path),
            Self::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes() {
        assert_eq!(Route::resolve("/"), Route::Home);
        assert_eq!(Route::resolve(""), Route::Home);
        assert_eq!(Route::resolve("/learn"), Route::Learn);
        assert_eq!(Route::resolve("/learn/"), Route::Learn);
    }

    #[test]
    fn test_lesson_routes() {
        match Route::resolve("/deployment") {
            Route::Lesson(info) => assert_eq!(info.id, "deployment"),
            other => panic!("unexpected route: {:?}", other),
        }
        assert_eq!(Route::resolve("/storagetwo").path(), Some("/storagetwo"));
    }

    #[test]
    fn test_unknown_route() {
        assert_eq!(Route::resolve("/about"), Route::NotFound);
        assert_eq!(Route::resolve("deployment"), Route::NotFound);
        assert_eq!(Route::NotFound.path(), None);
    }
}
