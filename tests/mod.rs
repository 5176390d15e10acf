mod helpers;

#[test]
fn fixtures_are_present_and_readable() {
    let good = helpers::read_fixture("measurements.csv");
    let bad = helpers::read_fixture("bad_rows.csv");

    assert!(good.starts_with(b"name,value,reference"));
    assert!(bad.starts_with(b"name,value,reference"));
    assert_ne!(good, bad);
}
