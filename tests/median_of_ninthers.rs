use select_comp::median_of_ninthers::SelectImpl;
use select_test_tools::instantiate_select_tests;

instantiate_select_tests!(SelectImpl);
