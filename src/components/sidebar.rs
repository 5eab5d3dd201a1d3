use hv_auth::AuthKind;

/// One entry in the console's side navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Link {
        text: &'static str,
        href: &'static str,
        external: bool,
    },
    Divider,
}

impl NavItem {
    const fn link(text: &'static str, href: &'static str) -> Self {
        Self::Link {
            text,
            href,
            external: false,
        }
    }
}

/// Header link shown above the navigation.
pub fn header() -> NavItem {
    NavItem::link("Cluster management", "/clusters")
}

/// Build the sidebar for the given identity provider.
///
/// Azure AD deployments manage users in the directory, so the Users entry
/// is omitted there.
pub fn navigation_items(kind: AuthKind) -> Vec<NavItem> {
    let mut items = vec![
        NavItem::link("Clusters", "/clusters"),
        NavItem::link("Images", "/images"),
    ];

    if kind != AuthKind::AzureAd {
        items.push(NavItem::link("Users", "/users"));
    }

    items.push(NavItem::Divider);
    items.push(NavItem::Link {
        text: "View license",
        href: "/license.txt",
        external: true,
    });
    items
}

/// Section prefix of `path`, used to highlight the active entry.
pub fn active_href(path: &str) -> String {
    let section = path.split('/').nth(1).unwrap_or_default();
    format!("/{section}")
}
