use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdCircleCheck, LdClock, LdFileText, LdIndianRupee, LdInfo, LdMail, LdMapPin,
    LdMessageSquare, LdPackage, LdPhone, LdRoute, LdShoppingCart, LdTrendingDown, LdTrendingUp,
    LdTriangleAlert, LdTruck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::Glyph;

/// Lucide icon for a glyph slot in the sample tables.
#[component]
pub fn GlyphIcon(glyph: Glyph, #[props(default = 20)] size: u32) -> Element {
    match glyph {
        Glyph::AlertTriangle => rsx! { Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: size, height: size } },
        Glyph::Calendar => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: size, height: size } },
        Glyph::CheckCircle => rsx! { Icon::<LdCircleCheck> { icon: LdCircleCheck, width: size, height: size } },
        Glyph::Clock => rsx! { Icon::<LdClock> { icon: LdClock, width: size, height: size } },
        Glyph::Dollar => rsx! { Icon::<LdIndianRupee> { icon: LdIndianRupee, width: size, height: size } },
        Glyph::FileText => rsx! { Icon::<LdFileText> { icon: LdFileText, width: size, height: size } },
        Glyph::HelpCircle => rsx! { Icon::<LdInfo> { icon: LdInfo, width: size, height: size } },
        Glyph::Mail => rsx! { Icon::<LdMail> { icon: LdMail, width: size, height: size } },
        Glyph::MapPin => rsx! { Icon::<LdMapPin> { icon: LdMapPin, width: size, height: size } },
        Glyph::MessageSquare => rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: size, height: size } },
        Glyph::Package => rsx! { Icon::<LdPackage> { icon: LdPackage, width: size, height: size } },
        Glyph::Phone => rsx! { Icon::<LdPhone> { icon: LdPhone, width: size, height: size } },
        Glyph::Route => rsx! { Icon::<LdRoute> { icon: LdRoute, width: size, height: size } },
        Glyph::ShoppingCart => rsx! { Icon::<LdShoppingCart> { icon: LdShoppingCart, width: size, height: size } },
        Glyph::TrendingDown => rsx! { Icon::<LdTrendingDown> { icon: LdTrendingDown, width: size, height: size } },
        Glyph::TrendingUp => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: size, height: size } },
        Glyph::Truck => rsx! { Icon::<LdTruck> { icon: LdTruck, width: size, height: size } },
        Glyph::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: size, height: size } },
    }
}
