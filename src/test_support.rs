use crate::models::{Contract, Department};

pub struct ContractBuilder {
    contract: Contract,
}

impl ContractBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            contract: Contract {
                id,
                university: "جامعة الملك سعود".to_string(),
                college: "كلية الهندسة".to_string(),
                program: "الهندسة المدنية".to_string(),
                degree: "بكالوريوس".to_string(),
                contract_status: "ساري".to_string(),
                document_status: "تم التسليم".to_string(),
                contract_start: None,
                contract_end: None,
                completion_rate: None,
                document_received: None,
                scheduled_visit: None,
                department: Department::Engineering.label().to_string(),
                notes: None,
            },
        }
    }

    pub fn university(mut self, value: &str) -> Self {
        self.contract.university = value.to_string();
        self
    }

    pub fn college(mut self, value: &str) -> Self {
        self.contract.college = value.to_string();
        self
    }

    pub fn program(mut self, value: &str) -> Self {
        self.contract.program = value.to_string();
        self
    }

    pub fn degree(mut self, value: &str) -> Self {
        self.contract.degree = value.to_string();
        self
    }

    pub fn document_status(mut self, value: &str) -> Self {
        self.contract.document_status = value.to_string();
        self
    }

    pub fn department(mut self, value: &str) -> Self {
        self.contract.department = value.to_string();
        self
    }

    pub fn completion(mut self, value: &str) -> Self {
        self.contract.completion_rate = Some(value.to_string());
        self
    }

    pub fn start(mut self, value: &str) -> Self {
        self.contract.contract_start = Some(value.to_string());
        self
    }

    pub fn end(mut self, value: &str) -> Self {
        self.contract.contract_end = Some(value.to_string());
        self
    }

    pub fn build(self) -> Contract {
        self.contract
    }
}

pub fn contract_ending(id: i64, end: Option<&str>) -> Contract {
    let builder = ContractBuilder::new(id);
    match end {
        Some(end) => builder.end(end).build(),
        None => builder.build(),
    }
}
