use calstep::{date_range, DateOffset, MonthEnd, Offset, OffsetConfig, Week};
use chrono::{NaiveDate, Weekday};

fn main() {
    let start = NaiveDate::from_ymd_opt(2020, 1, 15)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();

    let month_end = Offset::from(MonthEnd::new(1));
    println!("{} + {} = {}", start, month_end, start + &month_end);

    let next_friday = Offset::from(Week::on(Weekday::Fri));
    println!("{} + {} = {}", start, next_friday, start + &next_friday);

    let quarterly = DateOffset::new(OffsetConfig {
        months: Some(3),
        ..OffsetConfig::default()
    });
    println!(
        "quarterly ({}): {}",
        quarterly.freq_label().unwrap(),
        quarterly.try_forward(start).unwrap()
    );

    let end = NaiveDate::from_ymd_opt(2020, 6, 30)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();
    println!("month ends from {start} to {end}:");
    for point in date_range(start, end, &month_end).unwrap() {
        println!("  {point}");
    }
}
