use super::world::HotelWorld;
use anyhow::{Ok, Result};
use browser_harness::pages::homepage;
use browser_harness::HomepageCheck;
use cucumber::{given, then};

#[given("I am on the homepage")]
async fn i_am_on_the_homepage(world: &mut HotelWorld) -> Result<()> {
    let session = world.start_session().await?;
    homepage::open(session).await?;

    Ok(())
}

#[then(expr = "I should see the page title {string}")]
async fn i_should_see_the_page_title(world: &mut HotelWorld, title: String) -> Result<()> {
    homepage::verify(world.browser()?, &HomepageCheck::Title(title)).await?;

    Ok(())
}

#[then(expr = "I should see a navbar with {string}, {string}, and {string} options")]
async fn i_should_see_a_navbar_with(
    world: &mut HotelWorld,
    first: String,
    second: String,
    third: String,
) -> Result<()> {
    let check = HomepageCheck::Navbar(vec![first, second, third]);
    homepage::verify(world.browser()?, &check).await?;

    Ok(())
}

#[then(expr = "I should see the heading {string}")]
async fn i_should_see_the_heading(world: &mut HotelWorld, heading: String) -> Result<()> {
    homepage::verify(world.browser()?, &HomepageCheck::Heading(heading)).await?;

    Ok(())
}
