use std::io::{BufRead, Write};

use crate::catalog::Category;

pub const MIN_CATEGORIES: usize = 2;

pub fn select_categories<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    categories: &[Category],
) -> anyhow::Result<Vec<String>> {
    loop {
        writeln!(
            output,
            "Choose at least {MIN_CATEGORIES} categories separated by spaces, e.g.: beletria komiksy"
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("input closed before a valid category selection");
        }

        let picks: Vec<&str> = line.split_whitespace().collect();
        if picks.len() < MIN_CATEGORIES {
            writeln!(
                output,
                "You need to enter at least {MIN_CATEGORIES} categories."
            )?;
            continue;
        }
        if let Some(unknown) = picks
            .iter()
            .copied()
            .find(|pick| !categories.iter().any(|category| category.slug == *pick))
        {
            writeln!(output, "Unknown category {unknown}, please try again.")?;
            continue;
        }

        return Ok(picks.into_iter().map(str::to_owned).collect());
    }
}
