use super::*;

pub(crate) struct ElementLimitStage;

impl Stage for ElementLimitStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let Some(limit) = context.options().max_elems_to_parse else {
      return Ok(());
    };

    let found = context.document().element_count();

    if found > limit {
      return Err(Error::ElementLimitExceeded { found, limit });
    }

    Ok(())
  }
}
