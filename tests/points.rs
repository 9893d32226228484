use geoshift::{convert, Bd09, Error, Frame, Gcj02, ParseCoord, Wgs84};

const BEIJING: (f64, f64) = (116.3912757, 39.906217);

#[test]
fn typed_points_match_raw_functions() {
    let wgs = Wgs84::create(BEIJING.0, BEIJING.1).unwrap();
    let gcj = wgs.to_gcj02();
    let bd = wgs.to_bd09();

    assert_eq!(<(f64, f64)>::from(gcj), convert::wgs84_to_gcj02(BEIJING.0, BEIJING.1));
    assert_eq!(<(f64, f64)>::from(bd), convert::wgs84_to_bd09(BEIJING.0, BEIJING.1));
    assert_eq!(gcj.to_bd09(), bd);
    assert_eq!(Bd09::from(gcj), bd);
    assert_eq!(Gcj02::from(bd), Gcj02::from_bd09(&bd));
    assert_eq!(Wgs84::from(bd), bd.to_wgs84());
    assert_eq!(Wgs84::from(gcj), gcj.to_wgs84());
}

#[test]
fn conversion_distance() {
    let wgs = Wgs84::create(BEIJING.0, BEIJING.1).unwrap();
    let gcj = wgs.to_gcj02();

    // Compare positions numerically, ignoring frames: the GCJ-02 shift in
    // Beijing is a bit over half a kilometer
    let shifted = Wgs84::from(<(f64, f64)>::from(gcj));
    let dist = wgs.haversine(&shifted);
    assert!((400.0..800.0).contains(&dist), "{dist}");

    assert!(wgs.haversine(&gcj.to_wgs84()) < 1.0);
    assert!(gcj.haversine(&wgs.to_bd09().to_gcj02()) < 0.1);
}

#[test]
fn create_rejects_out_of_range() {
    assert!(Wgs84::create(180.0, 90.0).is_ok());
    assert!(Gcj02::create(-180.0, -90.0).is_ok());

    assert!(matches!(Wgs84::create(181.0, 0.0), Err(Error::InvalidCoord(_))));
    assert!(matches!(Gcj02::create(0.0, 91.0), Err(Error::InvalidCoord(_))));
    assert!(matches!(Bd09::create(f64::NAN, 0.0), Err(Error::InvalidCoord(_))));
    assert!(matches!(Bd09::create(0.0, f64::NEG_INFINITY), Err(Error::InvalidCoord(_))));
}

#[test]
fn error_messages() {
    let err = Wgs84::create(0.0, 100.0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Coordinate parameters are not valid: Latitude 100 outside of valid range [-90, 90]."
    );

    let err = Gcj02::parse_coord("1;2").unwrap_err();
    assert!(err.to_string().contains("Expected"), "{err}");
}

#[test]
fn parse_and_display() {
    let coord: Wgs84 = "116.3912757,39.906217".parse().unwrap();
    assert_eq!(coord.to_string(), "116.3912757,39.906217");

    let coord = Bd09::parse_coord("-73.985278 40.748333").unwrap();
    assert_eq!(coord.longitude(), -73.985278);
    assert_eq!(coord.latitude(), 40.748333);

    let coord: Gcj02 = geoshift::from_str(String::from("121.4737, 31.2304")).unwrap();
    assert_eq!(coord.to_string().parse::<Gcj02>().unwrap(), coord);

    assert!("".parse::<Wgs84>().is_err());
    assert!("north,east".parse::<Gcj02>().is_err());
    assert!("200,10".parse::<Bd09>().is_err());
}

#[test]
fn region_gate_on_points() {
    let tokyo = Wgs84::create(139.6917, 35.6895).unwrap();
    assert!(tokyo.is_outside_mainland_china());
    assert_eq!(<(f64, f64)>::from(tokyo.to_gcj02()), (139.6917, 35.6895));

    let gcj = Gcj02::create(BEIJING.0, BEIJING.1).unwrap();
    assert!(!gcj.is_outside_mainland_china());
}

#[test]
fn frame_dispatch_matches_raw_functions() {
    let (lng, lat) = BEIJING;

    assert_eq!(Frame::Wgs84.convert(Frame::Gcj02, lng, lat), convert::wgs84_to_gcj02(lng, lat));
    assert_eq!(Frame::Wgs84.convert(Frame::Bd09, lng, lat), convert::wgs84_to_bd09(lng, lat));
    assert_eq!(Frame::Gcj02.convert(Frame::Wgs84, lng, lat), convert::gcj02_to_wgs84(lng, lat));
    assert_eq!(Frame::Gcj02.convert(Frame::Bd09, lng, lat), convert::gcj02_to_bd09(lng, lat));
    assert_eq!(Frame::Bd09.convert(Frame::Wgs84, lng, lat), convert::bd09_to_wgs84(lng, lat));
    assert_eq!(Frame::Bd09.convert(Frame::Gcj02, lng, lat), convert::bd09_to_gcj02(lng, lat));

    for frame in Frame::ALL {
        assert_eq!(frame.convert(frame, lng, lat), (lng, lat));
    }
}

#[test]
fn frame_names() {
    assert_eq!(Frame::Wgs84.to_string(), "WGS-84");
    assert_eq!(Frame::Gcj02.to_string(), "GCJ-02");
    assert_eq!(Frame::Bd09.to_string(), "BD-09");

    assert_eq!("GPS".parse::<Frame>().unwrap(), Frame::Wgs84);
    assert_eq!("mars".parse::<Frame>().unwrap(), Frame::Gcj02);
    assert_eq!("BD-09".parse::<Frame>().unwrap(), Frame::Bd09);
    assert!(matches!("cgcs2000".parse::<Frame>(), Err(Error::UnknownFrame(_))));

    assert!(Frame::Wgs84.applies_region_gate());
    assert!(Frame::Gcj02.applies_region_gate());
    assert!(!Frame::Bd09.applies_region_gate());
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let coord = Wgs84::create(BEIJING.0, BEIJING.1).unwrap().to_bd09();
    let json = serde_json::to_string(&coord).unwrap();
    assert!(json.starts_with(r#"{"longitude":116.4038906446"#), "{json}");
    assert_eq!(serde_json::from_str::<Bd09>(&json).unwrap(), coord);

    let coord: Gcj02 = serde_json::from_str(r#"{"lng":121.4737,"lat":31.2304}"#).unwrap();
    assert_eq!(coord.longitude(), 121.4737);

    assert_eq!(serde_json::to_string(&Frame::Gcj02).unwrap(), r#""gcj02""#);
    assert_eq!(serde_json::from_str::<Frame>(r#""bd09""#).unwrap(), Frame::Bd09);
}
