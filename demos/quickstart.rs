use chrono::Utc;
use epochal::{Duration, Instant, TimeFields};

fn main() {
    let now = Instant::now();
    let bridged = Instant::from(Utc::now());
    let deadline = now.add_date(0, 1, 0) + Duration::hours(9.0);
    let launch = Instant::from_fields(TimeFields::new().year(2021).month(1).day(1));

    println!("now:      {now} (ISO week {})", now.week());
    println!("chrono:   {bridged}");
    println!("deadline: {deadline} (unix {})", deadline.unix());
    println!("launch:   {launch} (ISO week {})", launch.week());

    match Instant::from_iso_string("not-a-date") {
        Ok(t) => println!("parsed:   {t}"),
        Err(err) => println!("error:    {err}"),
    }
}
