extern crate connect_four;

use connect_four::game::connect_four::ConnectFour;
use connect_four::game::game::Game;

fn main() {
    let mut game = ConnectFour::new("red", "gold");

    // red stacks column 3 while gold wanders along the bottom row
    for col in [3, 0, 3, 1, 3, 2, 3] {
        let outcome = game.update(col).unwrap();
        println!("{:?}", outcome);
    }
    println!("{:?}", game);
}
