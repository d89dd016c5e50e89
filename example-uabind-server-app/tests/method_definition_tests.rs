use chrono::{DateTime, TimeZone, Utc};
use example_uabind_server_app::bind_sample_methods;
use example_uabind_server_app::method_definition::{clock, math, text};
use uabind::{StatusCode, Variant};
use uabind_server::{CallMethodRequest, UaServer};

#[test]
fn test_length_plus_offset() {
    assert_eq!(text::length_plus_offset(5, "hello".into()), Ok(10));
    assert_eq!(text::length_plus_offset(-2, "grüße".into()), Ok(3));

    let overflow = text::length_plus_offset(i32::MAX, "x".into()).unwrap_err();
    assert_eq!(overflow.status, StatusCode::BadOutOfRange);
    assert_eq!(text::length_plus_offset(i32::MAX, String::new()), Ok(i32::MAX));
}

#[test]
fn test_divide() {
    assert_eq!(math::divide(9.0, 3.0), Ok(3.0));
    assert_eq!(
        math::divide(1.0, 0.0).unwrap_err().status,
        StatusCode::BadInvalidArgument
    );
    assert_eq!(math::add(1.5, 2.0), 3.5);
}

#[test]
fn test_shift_timestamp_saturates() {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(
        clock::shift_timestamp(at, 60),
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 1, 0).unwrap()
    );
    assert_eq!(clock::shift_timestamp(at, i64::MAX), DateTime::<Utc>::MAX_UTC);
    assert_eq!(clock::shift_timestamp(at, i64::MIN), DateTime::<Utc>::MIN_UTC);
}

#[test]
fn test_length_plus_offset_overflow_through_server() {
    let mut server = UaServer::default();
    let objects = server.objects_folder();
    let machine = server
        .address_space_mut()
        .add_object(&objects, "Machine")
        .unwrap();
    let methods = bind_sample_methods(&mut server, &machine).unwrap();

    let call = |inputs: Vec<Variant>| {
        server.call(
            &machine,
            &CallMethodRequest::new(machine.clone(), methods.length_plus_offset.clone(), inputs),
        )
    };

    let ok = call(vec![Variant::Int32(5), Variant::from("hello")]);
    assert_eq!(ok.output(), Some(&Variant::Int32(10)));

    let overflow = call(vec![Variant::Int32(i32::MAX), Variant::from("hello")]);
    assert_eq!(overflow.status, StatusCode::BadOutOfRange);
    assert!(overflow.output_arguments.is_empty());
}
