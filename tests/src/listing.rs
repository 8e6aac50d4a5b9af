use rom_lib::{make_rom, parse, parse_listing, ConfigError, ListingConfig};

#[test]
fn token_count() {
    let source = r#"
        ; clear decimal mode, set up the stack
        0xd8
        0xa2, 0xff ,0x9a

        ; loop forever
        0x4c,,,0x06,0x80 ; JMP $8006
    "#;
    let code = parse_listing(source).unwrap();
    assert_eq!(code.len(), 7);
    assert_eq!(*code, [0xd8, 0xa2, 0xff, 0x9a, 0x4c, 0x06, 0x80]);
}

#[test]
fn other_markers() {
    let default = r#"
        0xa9,0x01 ; LDA #1
        0x8d,0x00,0x20 ; STA $2000
    "#;
    let config = ListingConfig::new(':', '#').unwrap();
    let custom = r#"
        0xa9:0x01 # LDA #1
        0x8d:0x00::0x20 # STA $2000
    "#;
    assert_eq!(parse_listing(default).unwrap(), parse(custom, &config).unwrap());

    let a = make_rom(Some(default), 0x8000, &ListingConfig::default()).unwrap();
    let b = make_rom(Some(custom), 0x8000, &config).unwrap();
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn bad_config() {
    assert_eq!(ListingConfig::new('#', '#'), Err(ConfigError::Same('#')));
    assert_eq!(ListingConfig::new('0', ';'), Err(ConfigError::Reserved('0')));
}

#[test]
fn diagnostics_name_the_line() {
    let err = parse_listing("0x01\n\n; ok\n0x02 0x03").unwrap_err();
    assert_eq!(err.line(), 4);
    assert!(err.to_string().contains("line 4"), "{err}");
}
