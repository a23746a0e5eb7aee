use super::{Msisdn, MsisdnError};
use anyhow::Result;
use std::str::FromStr;

#[test]
fn test_msisdn_successfully_normalizes_valid_inputs() -> Result<()> {
    let test_cases = vec![
        ("0832466539", "27832466539"),
        ("27832466539", "27832466539"),
        ("832466539", "27832466539"),
        ("+27 83 246 6539", "27832466539"),
        ("083-246-6539", "27832466539"),
        ("061 234 5678", "27612345678"),
        ("0712345678", "27712345678"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(Msisdn::from_str(input)?.as_str(), expected);
    }

    Ok(())
}

#[test]
fn test_msisdn_rejects_invalid_inputs() {
    assert!(matches!(Msisdn::from_str(""), Err(MsisdnError::Empty)));
    assert!(matches!(Msisdn::from_str("()- "), Err(MsisdnError::Empty)));
    assert!(matches!(Msisdn::from_str("08324665"), Err(MsisdnError::InvalidLength(_))));
    assert!(matches!(Msisdn::from_str("08324665391"), Err(MsisdnError::InvalidLength(_))));
    assert!(matches!(Msisdn::from_str("0123456789"), Err(MsisdnError::InvalidPrefix('1'))));
    assert!(matches!(Msisdn::from_str("0923456789"), Err(MsisdnError::InvalidPrefix('9'))));
}

#[test]
fn test_validate_reports_without_raising() {
    let valid = Msisdn::validate("0832466539");

    assert!(valid.is_valid);
    assert_eq!(valid.normalized, "27832466539");

    let invalid = Msisdn::validate("12345");

    assert!(!invalid.is_valid);
    assert_eq!(invalid.normalized, "2712345");
}

#[test]
fn test_all_mobile_prefixes_are_accepted() -> Result<()> {
    for prefix in ['6', '7', '8'] {
        let input = format!("0{prefix}32466539");
        let msisdn = Msisdn::from_str(&input)?;

        assert_eq!(msisdn.subscriber().len(), 9);
        assert!(msisdn.as_str().starts_with("27"));
    }

    Ok(())
}

#[test]
fn test_msisdn_serializes_as_plain_string() -> Result<()> {
    let msisdn = Msisdn::from_str("0832466539")?;

    assert_eq!(serde_json::to_string(&msisdn)?, "\"27832466539\"");

    let parsed: Msisdn = serde_json::from_str("\"27832466539\"")?;
    assert_eq!(parsed, msisdn);

    Ok(())
}
