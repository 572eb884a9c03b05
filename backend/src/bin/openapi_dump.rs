//! Print the OpenAPI document as JSON for external tooling.

use ecoscholar_backend::doc::ApiDoc;
use utoipa::OpenApi;

#[expect(clippy::print_stdout, reason = "writes the document for shell redirection")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", ApiDoc::openapi().to_pretty_json()?);
    Ok(())
}
