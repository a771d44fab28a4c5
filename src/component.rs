//! The closed component sum-type. Where the source dispatches
//! component -> predicate and component -> field through small lookup
//! functions, this is a plain enum with exhaustive match arms, so adding or
//! removing a component is a compile error everywhere it isn't handled.

use crate::charset;
use crate::uri::Uri;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Component {
    Scheme,
    UserInfo,
    Host,
    Port,
    Path,
    Query,
    Fragment,
}

impl Component {
    pub(crate) fn predicate(self) -> fn(u8) -> bool {
        match self {
            Component::Scheme => charset::is_scheme,
            Component::UserInfo => charset::is_userinfo,
            Component::Host => charset::is_host,
            Component::Port => charset::is_port,
            Component::Path => charset::is_path,
            Component::Query => charset::is_query,
            Component::Fragment => charset::is_fragment,
        }
    }

    /// Whether this component's grammar admits `%XX` escapes at all.
    pub(crate) fn allows_percent(self) -> bool {
        !matches!(self, Component::Scheme | Component::Port)
    }

    pub(crate) fn field(self, u: &Uri) -> &Option<String> {
        match self {
            Component::Scheme => &u.scheme,
            Component::UserInfo => &u.userinfo,
            Component::Host => &u.host,
            Component::Port => &u.port,
            Component::Path => &u.path,
            Component::Query => &u.query,
            Component::Fragment => &u.fragment,
        }
    }

    pub(crate) fn field_mut(self, u: &mut Uri) -> &mut Option<String> {
        match self {
            Component::Scheme => &mut u.scheme,
            Component::UserInfo => &mut u.userinfo,
            Component::Host => &mut u.host,
            Component::Port => &mut u.port,
            Component::Path => &mut u.path,
            Component::Query => &mut u.query,
            Component::Fragment => &mut u.fragment,
        }
    }
}
