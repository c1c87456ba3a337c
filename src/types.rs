//! Flat report records written by the output writers.
//!
//! These are decoupled from the API wire types in `slack::types`: each record is
//! built from one response item, written once, then dropped.

/// One row of the channel report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelLine {
    /// Channel name without the leading `#`.
    pub channel_name: String,
    /// Handle of the member who created the channel.
    pub user_name: String,
    /// Creation time, e.g. `2016-03-01 12:00:00 +0000 UTC`.
    pub created_date: String,
    pub num_members: u64,
    pub purpose: String,
}

impl ChannelLine {
    /// Column names, in field order.
    pub const HEADER: [&'static str; 5] =
        ["Name", "Creator", "CreatedDate", "NumMembers", "Purpose"];

    /// Field values as text, in `HEADER` order.
    #[must_use]
    pub fn fields(&self) -> [String; 5] {
        [
            self.channel_name.clone(),
            self.user_name.clone(),
            self.created_date.clone(),
            self.num_members.to_string(),
            self.purpose.clone(),
        ]
    }
}

/// One row of the user report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct UserLine {
    pub name: String,
    pub real_name: String,
    pub title: String,
    pub email: String,
    pub is_admin: bool,
    pub is_restricted: bool,
    pub is_ultra_restricted: bool,
    pub has_2fa: bool,
}

impl UserLine {
    /// Column names, in field order.
    pub const HEADER: [&'static str; 8] = [
        "Name",
        "RealName",
        "Title",
        "Email",
        "IsAdmin",
        "IsRestricted",
        "IsUltraRestricted",
        "Has2FA",
    ];

    /// Field values as text, in `HEADER` order. Booleans render as `true`/`false`.
    #[must_use]
    pub fn fields(&self) -> [String; 8] {
        [
            self.name.clone(),
            self.real_name.clone(),
            self.title.clone(),
            self.email.clone(),
            self.is_admin.to_string(),
            self.is_restricted.to_string(),
            self.is_ultra_restricted.to_string(),
            self.has_2fa.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_fields_follow_header_order() {
        let line = ChannelLine {
            channel_name: "general".to_owned(),
            user_name: "alice".to_owned(),
            created_date: "2016-03-01 12:00:00 +0000 UTC".to_owned(),
            num_members: 12,
            purpose: "Company-wide".to_owned(),
        };
        assert_eq!(
            line.fields(),
            [
                "general",
                "alice",
                "2016-03-01 12:00:00 +0000 UTC",
                "12",
                "Company-wide"
            ]
        );
    }

    #[test]
    fn test_user_booleans_render_as_text() {
        let line = UserLine {
            name: "bob".to_owned(),
            real_name: String::new(),
            title: String::new(),
            email: String::new(),
            is_admin: true,
            is_restricted: false,
            is_ultra_restricted: false,
            has_2fa: true,
        };
        let fields = line.fields();
        assert_eq!(fields[4], "true");
        assert_eq!(fields[5], "false");
        assert_eq!(fields[7], "true");
    }
}
