use apns_legacy::frame::{EncodeOptions, Encoder};
use apns_legacy::request::notification::{Alert, Notification, Priority};
use apns_legacy::request::payload::APS;
use argparse::{ArgumentParser, Store, StoreOption, StoreTrue};
use std::time::{Duration, SystemTime};

// Encodes a notification into a legacy binary frame and prints it as hex
fn main() {
    tracing_subscriber::fmt().init();

    let mut device_token = String::new();
    let mut message = String::from("Ch-check it out!");
    let mut identifier = 0u32;
    let mut ttl_secs: Option<u64> = None;
    let mut badge: Option<u32> = None;
    let mut sound: Option<String> = None;
    let mut mdm: Option<String> = None;
    let mut low_priority = false;
    let mut strict = false;

    {
        let mut ap = ArgumentParser::new();
        ap.set_description("APNs legacy binary frame encoder");
        ap.refer(&mut device_token)
            .add_option(&["-d", "--device_token"], Store, "APNs device token");
        ap.refer(&mut message)
            .add_option(&["-m", "--message"], Store, "Notification message");
        ap.refer(&mut identifier)
            .add_option(&["-i", "--identifier"], Store, "Notification identifier");
        ap.refer(&mut ttl_secs)
            .add_option(&["-e", "--expires_in"], StoreOption, "Seconds until the notification expires");
        ap.refer(&mut badge)
            .add_option(&["-b", "--badge"], StoreOption, "Badge number");
        ap.refer(&mut sound)
            .add_option(&["-s", "--sound"], StoreOption, "Sound to play");
        ap.refer(&mut mdm)
            .add_option(&["--mdm"], StoreOption, "MDM push magic, replaces the aps dictionary");
        ap.refer(&mut low_priority).add_option(
            &["-l", "--low_priority"],
            StoreTrue,
            "Deliver when it suits the device's power budget",
        );
        ap.refer(&mut strict)
            .add_option(&["--strict"], StoreTrue, "Require a 32 byte device token");
        ap.parse_args_or_exit();
    }

    let priority = if low_priority { Priority::Normal } else { Priority::High };

    let mut notification = Notification::new()
        .set_device_token(device_token)
        .set_identifier(identifier)
        .set_priority(priority);

    if let Some(ttl_secs) = ttl_secs {
        notification = notification.set_expiration(SystemTime::now() + Duration::from_secs(ttl_secs));
    }

    let mut aps = APS::new().set_alert(Alert::new().set_body(message));
    aps.badge = badge;
    aps.sound = sound;
    notification.payload.aps = aps;

    if let Some(mdm) = mdm {
        notification.payload.set_mdm(mdm);
    }

    let options = if strict {
        EncodeOptions::new().with_token_length_validation()
    } else {
        EncodeOptions::new()
    };

    match Encoder::new(options).encode(&notification) {
        Ok(frame) => println!("{}", hex_simd::encode_to_string(&frame, hex_simd::AsciiCase::Lower)),
        Err(error) => println!("Error: {}", error),
    };
}
