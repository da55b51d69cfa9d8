//! Client route table
//!
//! Maps client URL paths to page views. Matching ignores case, a trailing
//! slash, and any query string or fragment.

/// Page views of the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Dashboard,
    DataManagement,
    WeightConfig,
    Evaluation,
    Results,
    AlgorithmManagement,
}

impl View {
    /// Stable route name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::DataManagement => "DataManagement",
            Self::WeightConfig => "WeightConfig",
            Self::Evaluation => "Evaluation",
            Self::Results => "Results",
            Self::AlgorithmManagement => "AlgorithmManagement",
        }
    }

    /// Canonical path of this view
    pub fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::DataManagement => "/data-management",
            Self::WeightConfig => "/weight-config",
            Self::Evaluation => "/evaluation",
            Self::Results => "/results",
            Self::AlgorithmManagement => "/algorithm-management",
        }
    }
}

/// Where a route leads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteTarget {
    Redirect(&'static str),
    View(View),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub target: RouteTarget,
}

pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        target: RouteTarget::Redirect("/dashboard"),
    },
    Route {
        path: "/dashboard",
        target: RouteTarget::View(View::Dashboard),
    },
    Route {
        path: "/data-management",
        target: RouteTarget::View(View::DataManagement),
    },
    Route {
        path: "/weight-config",
        target: RouteTarget::View(View::WeightConfig),
    },
    Route {
        path: "/evaluation",
        target: RouteTarget::View(View::Evaluation),
    },
    Route {
        path: "/results",
        target: RouteTarget::View(View::Results),
    },
    Route {
        path: "/algorithm-management",
        target: RouteTarget::View(View::AlgorithmManagement),
    },
];

fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

/// Route registered for `path`, without following redirects
pub fn find(path: &str) -> Option<&'static Route> {
    let path = normalize(path);
    ROUTES.iter().find(|r| r.path.eq_ignore_ascii_case(path))
}

/// View shown for `path`, following redirects
pub fn resolve(path: &str) -> Option<View> {
    let mut current = find(path)?;
    // a redirect chain can visit each route at most once
    for _ in 0..ROUTES.len() {
        match current.target {
            RouteTarget::View(view) => return Some(view),
            RouteTarget::Redirect(to) => current = find(to)?,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects_to_dashboard() {
        assert_eq!(find("/").map(|r| r.target), Some(RouteTarget::Redirect("/dashboard")));
        assert_eq!(resolve("/"), Some(View::Dashboard));
        assert_eq!(resolve(""), Some(View::Dashboard));
    }

    #[test]
    fn test_every_view_resolves_from_its_path() {
        for view in [
            View::Dashboard,
            View::DataManagement,
            View::WeightConfig,
            View::Evaluation,
            View::Results,
            View::AlgorithmManagement,
        ] {
            assert_eq!(resolve(view.path()), Some(view), "{}", view.name());
        }
    }

    #[test]
    fn test_path_normalization() {
        assert_eq!(resolve("/results/"), Some(View::Results));
        assert_eq!(resolve("/Weight-Config"), Some(View::WeightConfig));
        assert_eq!(resolve("/evaluation?surveyId=3#step2"), Some(View::Evaluation));
        assert_eq!(resolve("/?tab=1"), Some(View::Dashboard));
    }

    #[test]
    fn test_unknown_path() {
        assert_eq!(resolve("/settings"), None);
        assert_eq!(resolve("/results/42"), None);
        assert!(find("/nope").is_none());
    }
}
