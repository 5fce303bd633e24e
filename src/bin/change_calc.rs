//! Interactive change calculator over the standard coin table.

use std::io::{self, BufRead, Write};

use capchange::{min_coins_with_limits, CoinSelection, CoinTable};

fn main() {
    let table = CoinTable::standard();

    println!("Coin Change Calculator (Limited Quantities)");
    println!("Available coins:");
    for spec in table.coins() {
        match spec.limit {
            Some(limit) => println!("  {:2}¢: {limit} coins available (limited)", spec.value),
            None => println!("  {:2}¢: unlimited", spec.value),
        }
    }
    println!("{}", "=".repeat(50));

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\nEnter the amount in cents (0 to quit): ");
        if io::stdout().flush().is_err() {
            break;
        }
        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let amount: i64 = match line.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                println!("Please enter a valid integer.");
                continue;
            }
        };
        if amount == 0 {
            println!("Thank you for using the Coin Change Calculator!");
            break;
        }
        if amount < 0 {
            println!("Please enter a positive amount.");
            continue;
        }

        let amount = amount as usize;
        let selection = min_coins_with_limits(&table, amount);
        print_selection(&table, amount, &selection);
    }
}

/// Prints the breakdown for one amount, then the remaining supply of the
/// limited denominations.
fn print_selection(table: &CoinTable, amount: usize, selection: &CoinSelection) {
    println!("\nTo make {amount} cents, you need:");
    println!("{}", "-".repeat(40));

    for spec in table.coins() {
        let count = selection.count_of(spec.value);
        if count == 0 {
            continue;
        }
        match spec.limit {
            Some(limit) => println!(
                "{count:2} x {:2}¢ coins (max {limit} available - limited)",
                spec.value
            ),
            None => println!("{count:2} x {:2}¢ coins (unlimited)", spec.value),
        }
    }

    println!("{}", "-".repeat(40));
    println!("Total coins needed: {}", selection.total_coins());

    if selection.total_coins() > 0 {
        let remaining: Vec<String> = table
            .coins()
            .iter()
            .filter_map(|spec| {
                spec.limit.map(|limit| {
                    format!("{} x {}¢", limit - selection.count_of(spec.value), spec.value)
                })
            })
            .collect();
        println!("Remaining: {}", remaining.join(", "));
    }
}
