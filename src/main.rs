use std::{env, time::Instant};

use combinator::{
    describe_result,
    errors::errors::ErrorTip,
    grammar::grammar::{expr, parse_assignment},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    // Without an argument, run the assignment demo
    let (parser, source) = match args.get(1) {
        Some(source) => (expr(), source.as_str()),
        None => (parse_assignment(), "x=3"),
    };

    let start = Instant::now();
    let result = parser.start()(source);
    log::info!("Parsed {:?} in {:?}", source, start.elapsed());

    println!("{}", describe_result(&result));

    if let Err(error) = &result {
        if let ErrorTip::Suggestion(tip) = error.get_tip() {
            println!("({})", tip);
        }
    }
}
