//! Configuration section definitions.
//!
//! Each module corresponds to a top-level key of `docsite.toml`:
//!
//! | Module    | Key                       | Purpose                          |
//! |-----------|---------------------------|----------------------------------|
//! | `locale`  | `locales`, `defaultLocale`| Language variants, root locale   |
//! | `logo`    | `logo`                    | Site logo                        |
//! | `sidebar` | `sidebar`                 | Navigation groups and items      |
//! | `social`  | `social`                  | Platform links                   |
//! | `style`   | `customCss`               | Extra stylesheets                |

pub mod locale;
pub mod logo;
pub mod sidebar;
pub mod social;
pub mod style;

pub use locale::{LocaleEntry, RawLocaleEntry, ResolvedLocales, resolve_locales};
pub use logo::{LogoConfig, RawLogo};
pub use sidebar::{
    RawAutogenerate, RawSidebarGroup, RawSidebarItem, RawSidebarLink, SidebarGroup, SidebarItem,
    SidebarLink, SidebarSource, resolve_sidebar,
};
pub use social::resolve_social;
pub use style::resolve_custom_css;
