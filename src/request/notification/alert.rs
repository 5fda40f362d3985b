use crate::request::payload::{is_blank, is_blank_list};

/// The user-facing part of the `aps` dictionary.
///
/// Every field is optional and is left out of the JSON when unset or empty.
/// The alert as a whole is only sent if it carries a body, a localization
/// key, localization arguments or an action localization key, see
/// [is_empty](#method.is_empty).
///
/// # Example
///
/// ```rust
/// # use apns_legacy::request::notification::Alert;
/// # fn main() {
/// let alert = Alert::new()
///     .set_body("What's up?")
///     .set_title("Hi there")
///     .set_loc_key("GREETING")
///     .set_loc_args(&["bob"]);
///
/// assert_eq!(
///     "{\"body\":\"What's up?\",\"title\":\"Hi there\",\"loc-key\":\"GREETING\",\"loc-args\":[\"bob\"]}",
///     &serde_json::to_string(&alert).unwrap()
/// );
/// # }
/// ```
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Alert {
    #[serde(skip_serializing_if = "is_blank")]
    pub body: Option<String>,

    #[serde(skip_serializing_if = "is_blank")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "is_blank")]
    pub action: Option<String>,

    #[serde(skip_serializing_if = "is_blank")]
    pub loc_key: Option<String>,

    #[serde(skip_serializing_if = "is_blank_list")]
    pub loc_args: Option<Vec<String>>,

    #[serde(skip_serializing_if = "is_blank")]
    pub action_loc_key: Option<String>,

    #[serde(skip_serializing_if = "is_blank")]
    pub launch_image: Option<String>,
}

impl Alert {
    pub fn new() -> Alert {
        Alert::default()
    }

    /// The text of the alert message.
    pub fn set_body<S>(mut self, body: S) -> Self
    where
        S: Into<String>,
    {
        self.body = Some(body.into());
        self
    }

    /// A short string describing the purpose of the notification. A title
    /// alone does not make the alert worth sending.
    ///
    /// ```rust
    /// # use apns_legacy::request::notification::Alert;
    /// # fn main() {
    /// let alert = Alert::new().set_title("a title");
    /// assert!(alert.is_empty());
    /// # }
    /// ```
    pub fn set_title<S>(mut self, title: S) -> Self
    where
        S: Into<String>,
    {
        self.title = Some(title.into());
        self
    }

    /// Label of the action button.
    pub fn set_action<S>(mut self, action: S) -> Self
    where
        S: Into<String>,
    {
        self.action = Some(action.into());
        self
    }

    /// A key to an alert-message string in the app's `Localizable.strings`.
    pub fn set_loc_key<S>(mut self, key: S) -> Self
    where
        S: Into<String>,
    {
        self.loc_key = Some(key.into());
        self
    }

    /// Values to appear in place of the format specifiers in `loc-key`.
    pub fn set_loc_args<S>(mut self, args: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        self.loc_args = Some(args.iter().map(|a| a.as_ref().to_string()).collect());
        self
    }

    /// The localization key for the action button.
    pub fn set_action_loc_key<S>(mut self, key: S) -> Self
    where
        S: Into<String>,
    {
        self.action_loc_key = Some(key.into());
        self
    }

    /// The filename of an image in the app bundle, used as the launch image
    /// when the user taps the action button.
    pub fn set_launch_image<S>(mut self, image: S) -> Self
    where
        S: Into<String>,
    {
        self.launch_image = Some(image.into());
        self
    }

    /// True if the alert has nothing to show. Only the body, `loc-key`,
    /// `loc-args` and `action-loc-key` count; title, action and launch image
    /// are carried along but never make an alert non-empty on their own.
    ///
    /// Older providers also counted the launch image, so they sent an alert
    /// carrying only `launch-image`. Here such an alert is dropped from `aps`.
    pub fn is_empty(&self) -> bool {
        is_blank(&self.body)
            && is_blank(&self.loc_key)
            && is_blank_list(&self.loc_args)
            && is_blank(&self.action_loc_key)
    }
}
