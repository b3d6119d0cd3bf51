use serde::{Deserialize, Serialize};

/// The four navigable views. Resolution is a pure function of the path; there
/// is no query-parameter contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    #[default]
    Home,
    ProfileCreate,
    JobPost,
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Route {
        match path.trim_end_matches('/') {
            "" | "/" => Route::Home,
            "/profile/create" => Route::ProfileCreate,
            "/job/post" => Route::JobPost,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::ProfileCreate => "/profile/create",
            Route::JobPost => "/job/post",
            Route::NotFound => "/404",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/profile/create"), Route::ProfileCreate);
        assert_eq!(Route::parse("/profile/create/"), Route::ProfileCreate);
        assert_eq!(Route::parse("/job/post"), Route::JobPost);
    }

    #[test]
    fn test_parse_falls_back_to_not_found() {
        assert_eq!(Route::parse("/jobs"), Route::NotFound);
        assert_eq!(Route::parse("/profile"), Route::NotFound);
        assert_eq!(Route::parse("/job/post/extra"), Route::NotFound);
    }
}
