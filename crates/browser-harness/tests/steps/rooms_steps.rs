use super::world::HotelWorld;
use anyhow::{Ok, Result};
use browser_harness::hotel_core::{NavLink, RoomEntry};
use browser_harness::pages::{self, rooms};
use browser_harness::RoomsCheck;
use cucumber::{then, when};

#[when(expr = "I click on {string} in the navbar")]
async fn i_click_on_in_the_navbar(world: &mut HotelWorld, label: String) -> Result<()> {
    let link: NavLink = label.parse()?;
    pages::follow(world.browser()?, link).await?;

    Ok(())
}

#[then(expr = "I should be on the {string} page")]
async fn i_should_be_on_the_page(world: &mut HotelWorld, title: String) -> Result<()> {
    rooms::verify(world.browser()?, &RoomsCheck::Title(title)).await?;

    Ok(())
}

#[then("I should see a table with the list of rooms")]
async fn i_should_see_a_table_of_rooms(world: &mut HotelWorld) -> Result<()> {
    rooms::verify(world.browser()?, &RoomsCheck::RoomTable).await?;

    Ok(())
}

#[then(expr = "the table should contain columns for {string}, {string}, and {string}")]
async fn the_table_should_contain_columns(
    world: &mut HotelWorld,
    first: String,
    second: String,
    third: String,
) -> Result<()> {
    let check = RoomsCheck::Columns(vec![first, second, third]);
    rooms::verify(world.browser()?, &check).await?;

    Ok(())
}

#[then(
    "I should see a room with the room number {string}, on floor {string}, with {string} under Good View"
)]
async fn i_should_see_a_room(
    world: &mut HotelWorld,
    room_number: String,
    floor_number: String,
    good_view: String,
) -> Result<()> {
    let entry = RoomEntry::new(room_number, floor_number, good_view);
    rooms::verify(world.browser()?, &RoomsCheck::Room(entry)).await?;

    Ok(())
}

#[then("I should see an alert displaying the number of rooms stored in the database")]
async fn i_should_see_the_rooms_stored_alert(world: &mut HotelWorld) -> Result<()> {
    rooms::verify(world.browser()?, &RoomsCheck::StoredAlert).await?;

    Ok(())
}
