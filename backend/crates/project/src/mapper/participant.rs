use kernel::messages::MappingError;

use crate::domain::entity::participant::Participant;
use crate::domain::value_object::aggregate_type::AggregateType;
use crate::messages::participant::ParticipantAggregateG3Avro;

impl ParticipantAggregateG3Avro {
    pub fn to_participant(&self) -> Result<Participant, MappingError> {
        AggregateType::Participant.expect(&self.aggregate_identifier)?;

        Ok(Participant {
            id: self.aggregate_identifier.to_id()?,
            version: self.aggregate_identifier.version,
            project: self.project.to_id()?,
            company: self.company.as_ref().map(|c| c.to_id()).transpose()?,
            user: self.user.as_ref().map(|u| u.to_id()).transpose()?,
            role: self.role.into(),
            status: self.status.into(),
            auditing: self.auditing_information.to_auditing()?,
        })
    }
}
