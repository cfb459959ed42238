use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdShieldCheck, LdTruck, LdUser};
use dioxus_free_icons::Icon;
use shared_types::Role;
use shared_ui::{TabList, TabTrigger, Tabs};

/// Role picker shown above the login and signup forms.
#[component]
pub fn RoleTabs(role: Role, on_change: EventHandler<Role>) -> Element {
    rsx! {
        Tabs {
            value: Some(role.as_str().to_string()),
            on_value_change: move |value: String| on_change.call(Role::parse_or_default(&value)),
            horizontal: true,
            TabList {
                for (index, tab) in Role::ALL.into_iter().enumerate() {
                    TabTrigger { key: "{tab}", value: tab.as_str().to_string(), index,
                        RoleIcon { role: tab }
                        span { "{tab.label()}" }
                    }
                }
            }
        }
    }
}

#[component]
fn RoleIcon(role: Role) -> Element {
    match role {
        Role::Vendor => rsx! { Icon::<LdUser> { icon: LdUser, width: 16, height: 16 } },
        Role::Supplier => rsx! { Icon::<LdTruck> { icon: LdTruck, width: 16, height: 16 } },
        Role::Admin => rsx! { Icon::<LdShieldCheck> { icon: LdShieldCheck, width: 16, height: 16 } },
    }
}
