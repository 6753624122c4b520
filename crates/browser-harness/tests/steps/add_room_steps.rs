use super::world::HotelWorld;
use anyhow::{Ok, Result};
use browser_harness::hotel_core::RoomField;
use browser_harness::pages::add_room;
use browser_harness::AddRoomAction;
use cucumber::{then, when};

#[when(expr = "I enter {string} in the {string} field")]
async fn i_enter_in_the_field(world: &mut HotelWorld, value: String, field: String) -> Result<()> {
    let field: RoomField = field.parse()?;
    add_room::perform(world.browser()?, &AddRoomAction::Fill(field, value)).await?;

    Ok(())
}

#[when(r#"I select {string} from the "Good View" dropdown"#)]
async fn i_select_good_view(world: &mut HotelWorld, value: String) -> Result<()> {
    add_room::perform(world.browser()?, &AddRoomAction::SelectGoodView(value)).await?;

    Ok(())
}

#[when(r#"I click the "Add room" button"#)]
async fn i_click_the_add_room_button(world: &mut HotelWorld) -> Result<()> {
    add_room::perform(world.browser()?, &AddRoomAction::Submit).await?;

    Ok(())
}

#[then("the new room should be added successfully")]
async fn the_new_room_should_be_added(world: &mut HotelWorld) -> Result<()> {
    add_room::verify_success(world.browser()?).await?;

    Ok(())
}

#[then(expr = "I should see a form with fields for {string}, {string}, and {string}")]
async fn i_should_see_a_form_with_fields(
    world: &mut HotelWorld,
    first: String,
    second: String,
    third: String,
) -> Result<()> {
    add_room::verify_form_fields(world.browser()?, &[first, second, third]).await?;

    Ok(())
}

#[then(expr = "I should see a submit button labeled {string}")]
async fn i_should_see_a_submit_button(world: &mut HotelWorld, label: String) -> Result<()> {
    add_room::verify_submit_button(world.browser()?, &label).await?;

    Ok(())
}
