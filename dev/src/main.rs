use log::{error, info};
use shingle_dice::{DiceSimilarity, StringSimilarity};

fn main() {
    env_logger::init();

    let dice = match DiceSimilarity::new(2) {
        Ok(dice) => dice,
        Err(e) => {
            error!("Error constructing similarity: {}", e);
            std::process::exit(1);
        }
    };

    // AB BC CD DE DF FG
    // 1  1  1  1  0  0
    // 1  1  1  0  1  1
    // => 2 x 3 / (4 + 5) = 6/9 = 0.6666
    info!("Comparing with shingle length {}", dice.shingle_length());
    println!("{}", dice.similarity("ABCDE", "ABCDFG"));
}
