use serde::{Deserialize, Serialize};

/// Counters shown at the top of the profile screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub display_name: String,
    pub handle: String,
    pub selling: u32,
    pub sold: u32,
    pub liked: u32,
}

impl ProfileSummary {
    /// Placeholder profile until Telegram user data is wired in.
    pub fn sample() -> Self {
        Self {
            display_name: "User Name".to_string(),
            handle: "@username".to_string(),
            selling: 12,
            sold: 8,
            liked: 5,
        }
    }

    /// Avatar letter: first character of the display name, uppercased.
    pub fn initial(&self) -> String {
        self.display_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "?".to_string())
    }
}

/// One row of the profile menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const PROFILE_MENU: &[MenuItem] = &[
    MenuItem { icon: "🛒", title: "My listings", description: "Manage the products you listed" },
    MenuItem { icon: "💝", title: "Liked products", description: "Products you are interested in" },
    MenuItem { icon: "💰", title: "Trade history", description: "Your purchases and sales" },
    MenuItem { icon: "⚙️", title: "Settings", description: "Notifications and account" },
];
