use proptest::prelude::*;
use recibos_core::{TOTAL_FIELDS, build, total};
use recibos_model::PrimaryRecord;
use rust_decimal::Decimal;

fn cents() -> impl Strategy<Value = Option<i64>> {
    prop::option::of(0i64..10_000_000)
}

fn format_cents(value: i64) -> String {
    Decimal::new(value, 2).to_string()
}

proptest! {
    #[test]
    fn total_is_sum_of_present_fields(expensa in cents(), agua in cents(), multa in cents()) {
        let mut record = PrimaryRecord::new(2);
        let mut expected = Decimal::ZERO;
        for (field, value) in TOTAL_FIELDS.iter().zip([expensa, agua, multa]) {
            if let Some(value) = value {
                record.insert(*field, format_cents(value));
                expected += Decimal::new(value, 2);
            }
        }

        prop_assert_eq!(total(&record, &TOTAL_FIELDS).unwrap().value(), expected);
    }

    #[test]
    fn document_total_matches_line_items(
        expensa in cents(),
        agua in cents(),
        multa in cents(),
    ) {
        let mut record: PrimaryRecord = [("DEPTO", "101"), ("FECHA", "01/03/2024")]
            .into_iter()
            .collect();
        for (field, value) in TOTAL_FIELDS.iter().zip([expensa, agua, multa]) {
            if let Some(value) = value {
                record.insert(*field, format_cents(value));
            }
        }

        let document = build(&record).unwrap();
        let grid = document.grids().next().unwrap();
        let present = [expensa, agua, multa].iter().flatten().count();
        prop_assert_eq!(grid.rows.len(), present);

        let sum: i64 = [expensa, agua, multa].iter().flatten().sum();
        let footer = grid.footer.as_ref().unwrap();
        prop_assert_eq!(&footer[1], &format!("${:.2}", Decimal::new(sum, 2)));
    }
}

