use boolf::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    println!("A simple example!");

    let x0 = BooleanFunction::variable(0, 3)?;
    let x1 = BooleanFunction::variable(1, 3)?;
    let x2 = BooleanFunction::variable(2, 3)?;

    let f = ((&x0 * &x1)? + &!&x2)?;
    println!("Truth table: {}", &f);
    println!("Polynomial: {}", get_polynom(&f));
    println!("With explicit operators: {}", efmt::XOR_FMT_CFG.display(&f.anf()));
    println!("Post classes: {:?}", f.post_classes());
    println!("Functionally complete: {}", f.is_functionally_complete());

    let nand: BooleanFunction = "1110".parse()?;
    let not = nand.compose(&[BooleanFunction::variable(0, 1)?, BooleanFunction::variable(0, 1)?])?;
    println!("nand(x, x) = {}", get_polynom(&not));

    Ok(())
}
