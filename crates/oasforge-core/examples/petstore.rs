// Build a small pet-store document and print it as pretty JSON
// Usage: cargo run --example petstore

use oasforge_core::{
    Info, MediaType, OpenApi, Operation, OperationBuilder, Parameter, ParameterLocation,
    PathItem, RequestBody, Response, Schema,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The reusable Pet schema; its ref name decides where it hoists
    let pet = Schema::object()
        .property("name", Schema::of::<String>())
        .property("age", Schema::of::<i64>())
        .property("tags", Schema::of::<Vec<String>>())
        .named("Pet");

    // Assembled by hand, the way a handwritten document reads
    let mut list_response = Response::new("Every pet in the store");
    list_response.add_content("application/json", MediaType::of(Schema::array_of(pet.clone())));
    let mut list_pets = Operation::new();
    list_pets.add_tag("pets");
    list_pets.add_response("200", list_response);

    // Assembled from handler metadata through the builder
    let mut new_pet_body = RequestBody::new();
    new_pet_body.add_content("application/json", MediaType::of(pet.clone()));
    let create_pet = OperationBuilder::new()
        .doc("Add a pet.\n\nThe new pet is returned with its assigned id.")
        .tag("pets")
        .operation_id("createPet")
        .request_body(new_pet_body)
        .response_schema::<i64>("201", "The assigned pet id")
        .build();

    let mut pets = PathItem::new();
    pets.get = list_pets.into();
    pets.post = create_pet.into();

    let mut pet_id = Parameter::new("petId", ParameterLocation::Path).with_schema(Schema::of::<i64>());
    pet_id.required = true.into();

    let mut show_response = Response::new("Your favourite pet");
    show_response.add_content("application/json", MediaType::of(pet));
    let mut show_pet = Operation::new();
    show_pet.add_tag("pets");
    show_pet.add_parameter(pet_id);
    show_pet.add_response("200", show_response);

    let mut pet_by_id = PathItem::new();
    pet_by_id.get = show_pet.into();

    let mut api = OpenApi::new(Info::new("Pet Store", "1.0.0"));
    api.add_path("/pets", pets);
    api.add_path("/pets/{petId}", pet_by_id);

    println!("{}", api.to_json_pretty()?);
    Ok(())
}
