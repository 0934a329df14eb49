//! Page footer.

use crate::prelude::*;

use crate::config::Selectors;



/// Write the current year into the year element. Returns the written year.
pub fn stamp_year(logger:&Logger, selectors:&Selectors) -> FallibleResult<u32> {
    let element = web::get_element_by_id(&selectors.year_id)?;
    let year    = web::current_year();
    element.set_text_content(Some(&year.to_string()));
    debug!(logger.sub("Footer"), "Stamped year {}.", year);
    Ok(year)
}
