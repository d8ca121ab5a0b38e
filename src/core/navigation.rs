//! Routes and the session guard.
//!
//! The guard is a pure function of the requested path and whether a session
//! token is present. [`Router::navigate`] is the only place it runs, and it
//! runs on every navigation.

use std::fmt;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const HOME_PATH: &str = "/home";
pub const ROOT_PATH: &str = "/";

/// The screen rendered for a path. Unknown paths fall back to Login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Home,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path {
            REGISTER_PATH => Route::Register,
            HOME_PATH => Route::Home,
            _ => Route::Login,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => LOGIN_PATH,
            Route::Register => REGISTER_PATH,
            Route::Home => HOME_PATH,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Where the guard sends a visitor, or `None` to stay on `path`.
///
/// Authenticated sessions only ever see `/home`; anonymous ones only
/// `/login` and `/register`.
pub fn guard(path: &str, authenticated: bool) -> Option<Route> {
    if authenticated {
        (path != HOME_PATH).then_some(Route::Home)
    } else {
        (path != LOGIN_PATH && path != REGISTER_PATH).then_some(Route::Login)
    }
}

/// Current location plus the guard applied on every change.
#[derive(Debug, Clone)]
pub struct Router {
    path: String,
}

impl Router {
    /// Starts at `path`, already guarded.
    pub fn new(path: &str, authenticated: bool) -> Self {
        let mut router = Self {
            path: String::new(),
        };
        router.navigate(path, authenticated);
        router
    }

    /// Move to `path`, then apply the guard. Returns the screen to render.
    pub fn navigate(&mut self, path: &str, authenticated: bool) -> Route {
        match guard(path, authenticated) {
            Some(redirect) => {
                tracing::debug!(from = path, to = redirect.path(), "guard redirect");
                self.path = redirect.path().to_string();
            }
            None => self.path = path.to_string(),
        }
        self.route()
    }

    /// Re-apply the guard to the current path, e.g. after the session changed.
    pub fn revalidate(&mut self, authenticated: bool) -> Route {
        let path = std::mem::take(&mut self.path);
        self.navigate(&path, authenticated)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn route(&self) -> Route {
        Route::from_path(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PATHS: &[&str] = &["/", "/login", "/register", "/home", "/settings", "", "/home/"];

    #[test]
    fn authenticated_visitors_land_on_home() {
        assert_eq!(guard("/login", true), Some(Route::Home));
        assert_eq!(guard("/register", true), Some(Route::Home));
        assert_eq!(guard("/", true), Some(Route::Home));
        assert_eq!(guard("/home", true), None);
    }

    #[test]
    fn anonymous_visitors_land_on_login() {
        assert_eq!(guard("/home", false), Some(Route::Login));
        assert_eq!(guard("/anything", false), Some(Route::Login));
        assert_eq!(guard("/login", false), None);
        assert_eq!(guard("/register", false), None);
    }

    #[test]
    fn guard_reaches_fixed_point_in_one_step() {
        for &authenticated in &[true, false] {
            for path in PATHS {
                let once = Router::new(path, authenticated).path().to_string();
                let twice = Router::new(&once, authenticated).path().to_string();
                assert_eq!(once, twice, "path {path:?}, authenticated {authenticated}");
                assert_eq!(guard(&once, authenticated), None);
            }
        }
    }

    #[test]
    fn unknown_paths_render_login() {
        assert_eq!(Route::from_path("/nope"), Route::Login);
        assert_eq!(Route::from_path("/register"), Route::Register);
    }

    #[test]
    fn revalidate_after_logout_goes_to_login() {
        let mut router = Router::new(HOME_PATH, true);
        assert_eq!(router.route(), Route::Home);
        assert_eq!(router.revalidate(false), Route::Login);
        assert_eq!(router.path(), LOGIN_PATH);
    }

    #[test]
    fn logout_navigates_to_root_then_login() {
        let mut router = Router::new(HOME_PATH, true);
        assert_eq!(router.navigate(ROOT_PATH, false), Route::Login);
        assert_eq!(router.path(), LOGIN_PATH);
    }
}
