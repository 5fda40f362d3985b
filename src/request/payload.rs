//! Payload with `aps`, `mdm` and custom data

use crate::error::Error;
use crate::request::notification::Alert;
use erased_serde::Serialize;
use serde_json::{self, Value};
use std::collections::BTreeMap;

const APS_KEY: &str = "aps";
const MDM_KEY: &str = "mdm";

/// The JSON body of a push notification.
///
/// Holds the custom data of the application and either an `mdm` string or
/// the [APS](struct.APS.html) dictionary. A non-empty `mdm` always wins, the
/// `aps` dictionary is then left out no matter what it contains.
#[derive(Debug, Clone, Default)]
pub struct Payload {
    /// The pre-defined notification data.
    pub aps: APS,
    /// Mobile device management push magic. Replaces `aps` when non-empty.
    pub mdm: Option<String>,
    data: BTreeMap<String, Value>,
}

impl Payload {
    pub fn new() -> Payload {
        Payload::default()
    }

    /// Switches the payload into MDM mode.
    ///
    /// ```rust
    /// # use apns_legacy::request::payload::Payload;
    /// # fn main() {
    /// let mut payload = Payload::new();
    /// payload.aps.sound = Some("default".into());
    /// payload.set_mdm("00000000-1111-3333-4444-555555555555");
    ///
    /// assert_eq!(
    ///     "{\"mdm\":\"00000000-1111-3333-4444-555555555555\"}",
    ///     &payload.to_json_string().unwrap()
    /// );
    /// # }
    /// ```
    pub fn set_mdm<S>(&mut self, mdm: S) -> &mut Self
    where
        S: Into<String>,
    {
        self.mdm = Some(mdm.into());
        self
    }

    /// True if the payload renders `mdm` instead of `aps`.
    pub fn is_mdm(&self) -> bool {
        !is_blank(&self.mdm)
    }

    /// Client-specific custom data to be added in the root of the payload.
    /// The `data` should implement `Serialize`, so any Rust collection or a
    /// struct with `#[derive(Serialize)]` from [Serde](https://serde.rs) works.
    ///
    /// The `aps` key is reserved and rejected with
    /// [Error::ReservedKey](../../error/enum.Error.html). An existing value
    /// under the same key is replaced.
    ///
    /// ```rust
    /// # use apns_legacy::request::payload::Payload;
    /// # use std::collections::HashMap;
    /// # fn main() {
    /// let mut payload = Payload::new();
    /// let mut custom_data = HashMap::new();
    ///
    /// custom_data.insert("foo", "bar");
    /// payload.set_custom_value("foo_data", &custom_data).unwrap();
    ///
    /// assert_eq!(
    ///     "{\"aps\":{},\"foo_data\":{\"foo\":\"bar\"}}",
    ///     &payload.to_json_string().unwrap()
    /// );
    /// assert!(payload.set_custom_value("aps", &custom_data).is_err());
    /// # }
    /// ```
    pub fn set_custom_value<K>(&mut self, key: K, data: &dyn Serialize) -> Result<&mut Self, Error>
    where
        K: Into<String>,
    {
        let key = key.into();

        if key == APS_KEY {
            return Err(Error::ReservedKey(key));
        }

        let value = serde_json::to_value(data)?;
        self.data.insert(key, value);

        Ok(self)
    }

    /// Removes a custom value, returning it if it was set.
    pub fn remove_custom_value(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    /// The custom data, ordered by key.
    pub fn custom_values(&self) -> &BTreeMap<String, Value> {
        &self.data
    }

    /// Combine the custom data with either `mdm` or `aps` to a final payload
    /// JSON. Keys in the root are sorted.
    pub fn to_json_string(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(&self.root())?)
    }

    /// Same as [to_json_string](#method.to_json_string), as raw bytes.
    pub fn to_json_vec(&self) -> Result<Vec<u8>, Error> {
        Ok(serde_json::to_vec(&self.root())?)
    }

    fn root(&self) -> BTreeMap<&str, &dyn Serialize> {
        let mut root: BTreeMap<&str, &dyn Serialize> = self
            .data
            .iter()
            .map(|(key, value)| (key.as_str(), value as &dyn Serialize))
            .collect();

        match self.mdm.as_ref().filter(|mdm| !mdm.is_empty()) {
            Some(mdm) => {
                root.insert(MDM_KEY, mdm);
            }
            None => {
                root.insert(APS_KEY, &self.aps);
            }
        }

        root
    }
}

/// The pre-defined notification data.
///
/// Every field is left out of the JSON while at its default, so an `APS`
/// with only the sound set renders as `{"sound":"default"}`. Keys are
/// written in alphabetical order.
///
/// ```rust
/// # use apns_legacy::request::notification::Alert;
/// # use apns_legacy::request::payload::APS;
/// # fn main() {
/// let aps = APS::new()
///     .set_alert(Alert::new().set_body("Hi"))
///     .set_badge(0)
///     .set_sound("default");
///
/// assert_eq!(
///     "{\"alert\":{\"body\":\"Hi\"},\"badge\":0,\"sound\":\"default\"}",
///     &serde_json::to_string(&aps).unwrap()
/// );
/// # }
/// ```
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct APS {
    /// The notification content. Left out when
    /// [Alert::is_empty](../notification/struct.Alert.html#method.is_empty).
    #[serde(skip_serializing_if = "Alert::is_empty")]
    pub alert: Alert,

    /// A number shown on top of the app icon. `None` leaves the badge as it
    /// is, `Some(0)` clears it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,

    /// When a notification includes the category key, the system displays the
    /// actions for that category as buttons in the banner or alert interface.
    /// Requires iOS 8 or later on the device.
    #[serde(skip_serializing_if = "is_blank")]
    pub category: Option<String>,

    /// Set to one for silent notifications.
    #[serde(skip_serializing_if = "is_zero")]
    pub content_available: Option<u32>,

    /// The name of the sound file to play when user receives the notification.
    #[serde(skip_serializing_if = "is_blank")]
    pub sound: Option<String>,

    /// Arguments for the URL of a Safari push notification.
    #[serde(skip_serializing_if = "is_blank_list")]
    pub url_args: Option<Vec<String>>,
}

impl APS {
    pub fn new() -> APS {
        APS::default()
    }

    pub fn set_alert(mut self, alert: Alert) -> Self {
        self.alert = alert;
        self
    }

    pub fn set_badge(mut self, badge: u32) -> Self {
        self.badge = Some(badge);
        self
    }

    pub fn set_sound<S>(mut self, sound: S) -> Self
    where
        S: Into<String>,
    {
        self.sound = Some(sound.into());
        self
    }

    pub fn set_content_available(mut self) -> Self {
        self.content_available = Some(1);
        self
    }

    pub fn set_category<S>(mut self, category: S) -> Self
    where
        S: Into<String>,
    {
        self.category = Some(category.into());
        self
    }

    pub fn set_url_args<S>(mut self, args: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        self.url_args = Some(args.iter().map(|a| a.as_ref().to_string()).collect());
        self
    }
}

pub(crate) fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

pub(crate) fn is_blank_list(value: &Option<Vec<String>>) -> bool {
    value.as_ref().map_or(true, Vec::is_empty)
}

fn is_zero(value: &Option<u32>) -> bool {
    value.map_or(true, |v| v == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_payload_has_empty_aps() {
        let payload = Payload::new();

        assert_eq!("{\"aps\":{}}", &payload.to_json_string().unwrap());
    }

    #[test]
    fn test_aps_with_sound_only() {
        let aps = APS::new().set_sound("default");

        assert_eq!("{\"sound\":\"default\"}", &serde_json::to_string(&aps).unwrap());
    }

    #[test]
    fn test_aps_badge_unset_is_omitted() {
        let aps = APS::new();

        assert_eq!("{}", &serde_json::to_string(&aps).unwrap());
    }

    #[test]
    fn test_aps_badge_zero_is_kept() {
        let aps = APS::new().set_badge(0);

        assert_eq!("{\"badge\":0}", &serde_json::to_string(&aps).unwrap());
    }

    #[test]
    fn test_aps_fields_at_default_are_omitted() {
        let aps = APS {
            alert: Alert::new().set_title("only a title"),
            badge: None,
            category: Some(String::new()),
            content_available: Some(0),
            sound: Some(String::new()),
            url_args: Some(Vec::new()),
        };

        assert_eq!("{}", &serde_json::to_string(&aps).unwrap());
    }

    #[test]
    fn test_aps_with_full_data() {
        let aps = APS::new()
            .set_alert(Alert::new().set_body("Hi there").set_title("Greetings"))
            .set_badge(420)
            .set_sound("prööt")
            .set_content_available()
            .set_category("cat1")
            .set_url_args(&["boarding", "A998"]);

        let expected = "{\"alert\":{\"body\":\"Hi there\",\"title\":\"Greetings\"},\
                        \"badge\":420,\
                        \"category\":\"cat1\",\
                        \"content-available\":1,\
                        \"sound\":\"prööt\",\
                        \"url-args\":[\"boarding\",\"A998\"]}";

        assert_eq!(expected, &serde_json::to_string(&aps).unwrap());
    }

    #[test]
    fn test_mdm_replaces_aps() {
        let mut payload = Payload::new();
        payload.aps = APS::new()
            .set_alert(Alert::new().set_body("ignored"))
            .set_badge(3)
            .set_sound("default");
        payload.set_mdm("X");

        let expected_payload = json!({ "mdm": "X" }).to_string();

        assert!(payload.is_mdm());
        assert_eq!(expected_payload, payload.to_json_string().unwrap());
    }

    #[test]
    fn test_empty_mdm_keeps_aps() {
        let mut payload = Payload::new();
        payload.aps = APS::new().set_badge(1);
        payload.set_mdm("");

        let expected_payload = json!({ "aps": { "badge": 1 } }).to_string();

        assert!(!payload.is_mdm());
        assert_eq!(expected_payload, payload.to_json_string().unwrap());
    }

    #[test]
    fn test_payload_with_custom_data() {
        #[derive(Serialize, Debug)]
        struct SubData {
            nothing: &'static str,
        }

        #[derive(Serialize, Debug)]
        struct TestData {
            key_str: &'static str,
            key_num: u32,
            key_bool: bool,
            key_struct: SubData,
        }

        let test_data = TestData {
            key_str: "foo",
            key_num: 42,
            key_bool: false,
            key_struct: SubData { nothing: "here" },
        };

        let mut payload = Payload::new();
        payload.aps = APS::new().set_content_available();
        payload.set_custom_value("custom", &test_data).unwrap();

        let expected_payload = json!({
            "aps": {
                "content-available": 1
            },
            "custom": {
                "key_str": "foo",
                "key_num": 42,
                "key_bool": false,
                "key_struct": {
                    "nothing": "here"
                }
            }
        })
        .to_string();

        assert_eq!(expected_payload, payload.to_json_string().unwrap());
    }

    #[test]
    fn test_custom_data_with_mdm() {
        let mut test_data = HashMap::new();
        test_data.insert("key_str", "foo");

        let mut payload = Payload::new();
        payload.set_mdm("magic");
        payload.set_custom_value("custom", &test_data).unwrap();
        payload.set_custom_value("zzz", &7).unwrap();

        assert_eq!(
            "{\"custom\":{\"key_str\":\"foo\"},\"mdm\":\"magic\",\"zzz\":7}",
            &payload.to_json_string().unwrap()
        );
    }

    #[test]
    fn test_custom_mdm_key_is_overwritten_in_mdm_mode() {
        let mut payload = Payload::new();
        payload.set_custom_value("mdm", &"custom").unwrap();

        assert_eq!("{\"aps\":{},\"mdm\":\"custom\"}", &payload.to_json_string().unwrap());

        payload.set_mdm("magic");

        assert_eq!("{\"mdm\":\"magic\"}", &payload.to_json_string().unwrap());
    }

    #[test]
    fn test_custom_struct_keys_are_sorted_and_html_is_not_escaped() {
        #[derive(Serialize, Debug)]
        struct Ordered {
            zulu: u32,
            alpha: u32,
        }

        let mut payload = Payload::new();
        payload.aps = APS::new().set_alert(Alert::new().set_body("Tom & <Jerry>"));
        payload.set_custom_value("data", &Ordered { zulu: 1, alpha: 2 }).unwrap();

        assert_eq!(
            "{\"aps\":{\"alert\":{\"body\":\"Tom & <Jerry>\"}},\"data\":{\"alpha\":2,\"zulu\":1}}",
            &payload.to_json_string().unwrap()
        );
    }

    #[test]
    fn test_reserved_aps_key_is_rejected() {
        let mut payload = Payload::new();
        payload.set_custom_value("foo", &1).unwrap();

        let result = payload.set_custom_value("aps", &"sneaky");

        assert!(matches!(result, Err(Error::ReservedKey(ref key)) if key == "aps"));
        assert_eq!(1, payload.custom_values().len());
        assert_eq!("{\"aps\":{},\"foo\":1}", &payload.to_json_string().unwrap());
    }

    #[test]
    fn test_custom_value_serialization_failure_leaves_payload_unchanged() {
        let mut bad_map = HashMap::new();
        bad_map.insert(vec![1u8], "not a string key");

        let mut payload = Payload::new();
        let result = payload.set_custom_value("bad", &bad_map);

        assert!(matches!(result, Err(Error::SerializeError(_))));
        assert!(payload.custom_values().is_empty());
    }

    #[test]
    fn test_custom_value_replace_and_remove() {
        let mut payload = Payload::new();
        payload.set_custom_value("foo", &1).unwrap();
        payload.set_custom_value("foo", &2).unwrap();

        assert_eq!(Some(&json!(2)), payload.custom_values().get("foo"));
        assert_eq!(Some(json!(2)), payload.remove_custom_value("foo"));
        assert_eq!(None, payload.remove_custom_value("foo"));
        assert_eq!("{\"aps\":{}}", &payload.to_json_string().unwrap());
    }

    #[test]
    fn test_json_vec_matches_string() {
        let mut payload = Payload::new();
        payload.aps = APS::new().set_sound("default");
        payload.set_custom_value("id", &"abc").unwrap();

        assert_eq!(
            payload.to_json_string().unwrap().into_bytes(),
            payload.to_json_vec().unwrap()
        );
    }
}
