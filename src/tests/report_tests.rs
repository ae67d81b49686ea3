use crate::models::Member;
use crate::report::{
    LedgerReport, balance_line, format_money, member_balance_line, round_cents, transfer_line,
};
use crate::tests::concert;
use crate::visualization::Visualization;
use rust_decimal_macros::dec;

#[test]
fn test_money_formatting() {
    assert_eq!(format_money("€", dec!(290)), "€290.00");
    assert_eq!(format_money("€", dec!(-21.666666666666)), "€-21.67");
    assert_eq!(format_money("$", dec!(0.005)), "$0.00");
    assert_eq!(format_money("€", dec!(-0.001)), "€0.00");
    assert_eq!(round_cents(dec!(61.666666666668)), dec!(61.67));
}

#[test]
fn test_line_formats() {
    let member = Member::with_balance("Annie", dec!(83.333333333334));
    assert_eq!(member_balance_line("€", &member), "Annie has balance: €83.33");
    assert_eq!(
        balance_line("€", "Annie", member.balance()),
        member_balance_line("€", &member)
    );
    assert_eq!(
        transfer_line("€", "Bill", "Annie", dec!(61.666666666668)),
        "Bill pays Annie €61.67"
    );
}

#[test]
fn test_text_report_for_concert() {
    let _ = env_logger::try_init();
    let mut concert = concert();
    let before = LedgerReport::from_ledger(&concert.ledger);
    let transfers = concert.ledger.reconcile();
    let report = before.with_transfers(&concert.ledger, &transfers);

    let expected = "\
Total: €290.00, that is €96.67 each.

Annie has balance: €83.33
Sally has balance: €-21.67
Bill has balance: €-61.67

Sally pays Annie €21.67
Bill pays Annie €61.67";
    assert_eq!(report.render_text("€"), expected);
}

#[test]
fn test_json_report_uses_string_amounts() {
    let concert = concert();
    let json = LedgerReport::from_ledger(&concert.ledger).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["event"], "Concert");
    assert_eq!(value["total"], "290.00");
    assert_eq!(value["balances"][1]["member"], "Sally");
    assert_eq!(value["balances"][1]["balance"], "-21.67");
    assert!(value["transfers"].as_array().unwrap().is_empty());
}

#[test]
fn test_balance_chart() {
    let concert = concert();
    let chart = Visualization::balance_chart(&concert.ledger, "€").unwrap();

    assert_eq!(chart["type"], "bar");
    assert_eq!(chart["data"]["labels"][0], "Annie");
    let bill = chart["data"]["datasets"][0]["data"][2].as_f64().unwrap();
    assert!((bill + 61.67).abs() < 1e-9);
    assert_eq!(
        chart["data"]["datasets"][0]["backgroundColor"][1],
        "rgba(255, 99, 132, 0.6)"
    );
    assert_eq!(
        chart["options"]["plugins"]["title"]["text"],
        "Balances for Event: Concert"
    );
}
