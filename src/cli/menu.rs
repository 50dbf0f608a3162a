use std::io;

use clap::Args;
use pizzeria::{
    catalog::{MenuQuery, NewProduct, SortOrder},
    money::to_money,
    products::{Category, Product},
    session::Session,
    sizes::Size,
    storage::KeyValueStore,
};
use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use super::CliError;

#[derive(Debug, Args)]
pub(crate) struct MenuArgs {
    /// Only show pizzas whose name contains this text
    #[arg(long)]
    search: Option<String>,

    /// Only show this category
    #[arg(long)]
    category: Option<Category>,

    /// Sort order (name-asc, name-desc, price-asc, price-desc)
    #[arg(long, default_value_t = SortOrder::NameAsc)]
    sort: SortOrder,
}

#[derive(Debug, Args)]
pub(crate) struct AddPizzaArgs {
    /// Pizza name
    #[arg(long)]
    name: String,

    /// Medium price; small and large are derived from it
    #[arg(long)]
    price: Decimal,

    /// Topping; repeat for each one
    #[arg(long = "ingredient", required = true)]
    ingredients: Vec<String>,

    /// Menu category
    #[arg(long)]
    category: Category,

    /// Image URL (http or https)
    #[arg(long)]
    image_url: Option<String>,
}

pub(crate) fn list<S: KeyValueStore>(
    args: &MenuArgs,
    session: &Session<S>,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    writeln!(out, "{}", session.cart().policy().banner())?;

    let query = MenuQuery {
        search: args.search.clone(),
        category: args.category,
        sort: args.sort,
    };

    let products = session.catalog().query(&query);

    if products.is_empty() {
        writeln!(out, "No pizzas found matching your criteria")?;
        return Ok(());
    }

    writeln!(out, "{}", menu_table(&products))?;

    Ok(())
}

pub(crate) fn add_pizza<S: KeyValueStore>(
    args: AddPizzaArgs,
    session: &mut Session<S>,
    out: &mut impl io::Write,
) -> Result<(), CliError> {
    let product = session.add_pizza(NewProduct {
        name: args.name,
        price: args.price,
        ingredients: args.ingredients,
        category: args.category,
        image_url: args.image_url,
    })?;

    writeln!(
        out,
        "Added {} ({}) at {}",
        product.name,
        product.id,
        to_money(product.price)
    )?;

    Ok(())
}

fn menu_table(products: &[&Product]) -> String {
    let mut builder = Builder::default();

    let mut header = vec!["Id".to_string(), "Pizza".to_string(), "Category".to_string()];
    header.extend(Size::ALL.iter().map(ToString::to_string));
    header.push("Ingredients".to_string());
    builder.push_record(header);

    for product in products {
        let mut row = vec![
            product.id.clone(),
            product.name.clone(),
            product.category.to_string(),
        ];
        row.extend(
            Size::ALL
                .iter()
                .map(|size| to_money(product.price_for(*size)).to_string()),
        );
        row.push(product.ingredients.join(", "));
        builder.push_record(row);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..6), Alignment::right());

    table.to_string()
}
