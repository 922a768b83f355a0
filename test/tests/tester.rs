use xdec_test::test::{Parser, Test};

#[test]
fn parse_flags() {
    let src = " +bits32\t+amd-branches  -strict-check -foo  +bar+foo";
    let mut flags = xdec_test::test::parse_flags(src);
    assert_eq!(flags.next(), Some(("bits32", true)));
    assert_eq!(flags.next(), Some(("amd-branches", true)));
    assert_eq!(flags.next(), Some(("strict-check", false)));
    assert_eq!(flags.next(), Some(("foo", false)));
    assert_eq!(flags.next(), Some(("bar+foo", true)));
    assert_eq!(flags.next(), None);
}

#[test]
fn parse() -> Result<(), String> {
    let src = r#"# comment
        1000: 90        Nopd # comment
        1000: 48 91     Xchg_r64_RAX RCX, RAX # +bits64
        1004: 0f05      Syscall

              62f14d0b  EVEX_Vpavgb
              c5        (need more bytes)
    "#;

    let mut parser = Parser::new("input", src);
    let mut test = Test::default();

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.line, 2);
    assert_eq!(test.address, 0x1000);
    assert_eq!(test.bytes, &[0x90]);
    assert_eq!(test.expect, "Nopd");
    assert_eq!(test.comment, "comment");

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.line, 3);
    assert_eq!(test.bytes, &[0x48, 0x91]);
    assert_eq!(test.expect, "Xchg_r64_RAX RCX, RAX");
    assert_eq!(test.comment, "+bits64");

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.address, 0x1004);
    assert_eq!(test.bytes, &[0x0f, 0x05]);

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.line, 6);
    assert_eq!(test.address, 0);
    assert_eq!(test.bytes, &[0x62, 0xf1, 0x4d, 0x0b]);
    assert_eq!(test.expect, "EVEX_Vpavgb");

    assert!(parser.parse(&mut test)?);
    assert_eq!(test.bytes, &[0xc5]);
    assert_eq!(test.expect, "(need more bytes)");

    assert!(!parser.parse(&mut test)?);
    Ok(())
}

#[test]
fn parse_errors() {
    let mut test = Test::default();
    assert!(Parser::new("input", "1000:   Nopd").parse(&mut test).is_err());
    assert!(Parser::new("input", "909  Nopd").parse(&mut test).is_err());
}

#[test]
fn parse_all() -> Result<(), String> {
    let (start, code) = Parser::parse_all("2000: 90  Nopd\n0f05  Syscall\n")?;
    assert_eq!(start, 0x2000);
    assert_eq!(code, &[0x90, 0x0f, 0x05]);
    Ok(())
}
