use super::*;

#[test]
fn rows_for_home_network() {
    let info = calculate("192.168.1.0/24").unwrap();
    let rows = rows(&info);
    assert_eq!(rows[0], ("Network", "192.168.1.0/24".to_owned()));
    assert_eq!(rows[4], ("Host range", "192.168.1.1 - 192.168.1.254".to_owned()));
    assert_eq!(rows[5], ("Usable hosts", "254".to_owned()));
    assert_eq!(rows[7], ("Class", "C".to_owned()));
    assert_eq!(rows[8], ("Scope", "Private".to_owned()));
}

#[test]
fn class_label_marks_special_ranges() {
    assert_eq!(class_label(AddressClass::D), "D (multicast)");
    assert_eq!(class_label(AddressClass::E), "E (reserved)");
}
