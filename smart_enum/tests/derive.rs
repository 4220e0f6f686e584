use smart_enum::{LookupError, SmartEnum};

#[derive(SmartEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Planet {
    Mercury,
    Venus,
    Earth = 10,
    Mars,
}

#[derive(SmartEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i8)]
enum Offset {
    Back = -3,
    Stay,
    Forward = 0x7f,
}

#[test]
fn test_derive_declaration() {
    assert_eq!(Planet::DECLARATION, "Mercury, Venus, Earth = 10, Mars");
    assert_eq!(Offset::DECLARATION, "Back = -3, Stay, Forward = 127");
}

#[test]
fn test_derive_tables_match_discriminants() {
    for planet in Planet::list() {
        assert_eq!(planet.to_value(), planet as i32);
    }
    assert_eq!(Planet::descriptor().list(), &[0, 1, 10, 11]);
    assert_eq!(Offset::descriptor().list(), &[-3, -2, 127]);
}

#[test]
fn test_derive_round_trip() {
    for planet in Planet::list() {
        let name = planet.to_name().unwrap();
        assert_eq!(Planet::from_name(name), Ok(planet));
        assert_eq!(name.parse::<Planet>(), Ok(planet));
    }
}

#[test]
fn test_derive_lookup_failures() {
    assert_eq!(
        Planet::from_name("Pluto"),
        Err(LookupError::NameNotFound("Pluto".to_string()))
    );
    assert_eq!(Planet::try_from(2i32), Err(LookupError::ValueNotFound(2)));
    assert_eq!(Offset::from_value(0), None);
}

#[test]
fn test_derive_display() {
    assert_eq!(Planet::Mars.to_string(), "Mars");
    assert_eq!(format!("{:<8}|", Offset::Stay), "Stay    |");
    assert_eq!(Offset::Back.display().to_string(), "Back");
}

#[test]
fn test_derive_value_conversions() {
    assert_eq!(i32::from(Offset::Forward), 127);
    assert_eq!(Offset::try_from(-2i32), Ok(Offset::Stay));
}
