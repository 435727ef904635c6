use crate::path::{merge_paths, remove_dot_segments};
use crate::url_components::UrlComponents;

impl UrlComponents {
    /// Resolve `relative` against `self` (RFC 3986 section 5.2.2).
    ///
    /// A relative reference carrying the base's own scheme is treated as
    /// scheme-less. The error state of a reference taken whole is kept.
    pub fn resolved(&self, relative: &Self) -> Self {
        let mut target = if relative.scheme.is_some() && relative.scheme != self.scheme {
            relative.clone()
        } else if relative.has_authority() {
            Self {
                scheme: self.scheme.clone(),
                ..relative.clone()
            }
        } else {
            let (path, query) = if relative.path.is_empty() {
                (
                    self.path.clone(),
                    relative.query.clone().or_else(|| self.query.clone()),
                )
            } else if relative.path.starts_with('/') {
                (relative.path.clone(), relative.query.clone())
            } else {
                let base_has_host = self.host.as_deref().is_some_and(|host| !host.is_empty());
                (
                    merge_paths(&self.path, base_has_host, &relative.path),
                    relative.query.clone(),
                )
            };
            Self {
                scheme: self.scheme.clone(),
                user_name: self.user_name.clone(),
                password: self.password.clone(),
                host: self.host.clone(),
                port: self.port,
                path,
                query,
                ..Self::default()
            }
        };

        target.fragment.clone_from(&relative.fragment);
        target.path = remove_dot_segments(&target.path);
        target
    }
}
