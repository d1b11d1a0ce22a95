use log::{info, LevelFilter};
use ordered_symbol_table::red_black_tree::RedBlackMap;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::error;

fn main() -> Result<(), Box<dyn error::Error>> {
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let mut map = RedBlackMap::new();
    for (index, word) in "it was the best of times it was the worst of times"
        .split_whitespace()
        .enumerate()
    {
        map.insert(word, index);
    }
    info!("{:?}", map);
    info!("height {} with black height {:?}", map.height(), map.validate());

    info!("min {} and max {}", map.min()?, map.max()?);
    info!("rank of \"the\" is {}", map.rank(&"the")?);
    info!("key of rank 2 is {}", map.select(2)?);
    info!("floor of \"thy\" is {}", map.floor(&"thy")?);
    info!("keys in [\"o\", \"w\"]: {}", map.range_len(&"o", &"w"));
    for (key, value) in map.range(&"o", &"w") {
        info!("  {} => {}", key, value);
    }

    map.remove(&"best")?;
    map.remove_min()?;
    map.remove_max()?;
    if let Err(err) = map.remove(&"best") {
        info!("second removal of \"best\" failed: {}", err);
    }
    info!("{:?}", map);
    Ok(())
}
