use postbox_core_contact_form_contracts::validation::MockContactFormValidationService;
use postbox_templates_contracts::MockTemplateService;

use crate::ContactFormFeatureServiceImpl;


type Sut = ContactFormFeatureServiceImpl<MockContactFormValidationService, MockTemplateService>;
