//! Authored step content for the built-in lessons.

use crate::lesson::LessonStep;

/// Cairo source of the contract deployed in the deployment lesson.
pub const SIMPLE_STORAGE_CONTRACT: &str = r#"#[starknet::interface]
trait ISimpleStorage<TContractState> {
    fn set(ref self: TContractState, x: u128);
    fn get(self: @TContractState) -> u128;
}

#[starknet::contract]
mod SimpleStorage {
    use starknet::storage::{StoragePointerReadAccess, StoragePointerWriteAccess};

    #[storage]
    struct Storage {
        stored_data: u128,
    }

    #[abi(embed_v0)]
    impl SimpleStorage of super::ISimpleStorage<ContractState> {
        fn set(ref self: ContractState, x: u128) {
            self.stored_data.write(x);
        }

        fn get(self: @ContractState) -> u128 {
            self.stored_data.read()
        }
    }
}"#;

/// Cairo source of the contract behind the storage demo.
pub const HELLO_CONTRACT: &str = r#"#[starknet::interface]
trait HelloContractInterface<TContractState> {
    fn add_two_numbers(ref self: TContractState, a:felt252, b:felt252);
    fn get_sum_of_two_numbers(self: @TContractState) -> felt252;
}

#[starknet::contract]
mod HelloContract {
    use starknet::storage::{StoragePointerReadAccess, StoragePointerWriteAccess};
    use super::HelloContractInterface;

    #[storage]
    pub struct Storage {
        pub sum: felt252
    }

    #[abi(embed_v0)]
    pub impl HelloImpl of HelloContractInterface<ContractState> {
        fn add_two_numbers(ref self: ContractState, a:felt252, b:felt252) {
            let sum_a_b = a + b;
            self.sum.write(sum_a_b);
        }

        fn get_sum_of_two_numbers(self: @ContractState) -> felt252 {
            self.sum.read()
        }
    }
}"#;

// Truncated output of `scarb build`, shown for illustration only.
const SIERRA_SNIPPET: &str = r#"{"sierra_program":["0x1","0x7","0x0","0x2","0xb","0x4","0xc0","0x40","0x19","0x52616e6765436865636b","0x800000000000000100000000000000000000000000000000","0x456e756d","0x800000000000000700000000000000000000000000000001","0x0","0x1e7cc030b6a62e51219c7055ff773a8dff8fb71637d893064207dc67ba74304","0x436f6e7374", ...]"#;

const ACCOUNT_LIST_OUTPUT: &str = "- hello-account:
  network: alpha-sepolia
  public key: 0x424c67d5142fee6422227310ff594d256d3cf81f359e8556c7259e8f695aa27
  address: 0x6e9660bcf2cda3cdb894e1456e8dd8a7485b7f593814ced6fcd4d955861fba9
  salt: 0x53963c497d1ff560
  class hash: 0xe2eb8f5672af4e6a4e8a8f1b44989685e668489b0a25437733756c5a34a1d6
  deployed: false
  legacy: false
  type: OpenZeppelin

- my_first_account:
  network: alpha-sepolia
  public key: 0x7a9cdb78b0092840f55e248fa182e45ca4e60ad6689fc9a8de2a47e5166184a
  address: 0x1a28ae8aa74cfeb97a02475a8d127c8c017b4741b67619b24aea5a5b2efcc32
  class hash: 0x61dac032f228abef9c6626f995015233097ae253a7f72d68552db02f2971b8f
  deployed: true
  legacy: false
  type: OpenZeppelin";

const SNCAST_SESSION: &str = "sncast --profile sepolia --account hello-account deploy --class-hash 0x006df12382e0809733b81dc1990711baf352abc56de7c1093a090b76cb426bd0
sncast --profile sepolia --account hello-account deploy --class-hash 0x006df12382e0809733b81dc1990711baf352abc56de7c1093a090b76cb426bd0 --constructor-calldata 5 10
sncast --profile sepolia --account hello-account call --contract-address 0x034785397fe1e60cc21d5debdf297eac980db15c7556d05271d4088796ed9411 --function get_sum
sncast --profile sepolia --account hello-account invoke --contract-address 0x034785397fe1e60cc21d5debdf297eac980db15c7556d05271d4088796ed9411 --function set_values --calldata 20 30";

/// Steps of the contract deployment walkthrough.
pub fn deployment_steps() -> Vec<LessonStep> {
    vec![
        LessonStep::new(
            "Cairo Smart Contract",
            "This is our simple storage contract written in Cairo. It allows storing and retrieving a u128 value.",
            "📝",
        )
        .with_snippet("SimpleStorage.cairo", "cairo", SIMPLE_STORAGE_CONTRACT)
        .with_notes(
            "Contract Breakdown",
            &[
                "#[starknet::interface] - Defines the contract's public interface",
                "#[starknet::contract] - Marks the module as a StarkNet contract",
                "#[storage] - Defines persistent storage variables",
                "#[abi(embed_v0)] - Implements the interface for external calls",
            ],
        ),
        LessonStep::new(
            "Build with Scarb",
            "Running `scarb build` compiles the Cairo code into Sierra (Safe Intermediate Representation).",
            "🔨",
        )
        .with_command("scarb build")
        .with_snippet("SimpleStorage.sierra.json", "json", SIERRA_SNIPPET)
        .with_notes(
            "What Happens During Build",
            &[
                "Cairo code is compiled to Sierra (Safe Intermediate Representation)",
                "Sierra provides safety guarantees and prevents infinite loops",
                "The output includes both Sierra and CASM (Cairo Assembly) files",
                "A contract class hash is generated for deployment",
            ],
        ),
        LessonStep::new(
            "Test Your Contract",
            "Use `snforge test` to run your tests and ensure your contract works correctly.",
            "🧪",
        )
        .with_command("snforge test")
        .with_notes(
            "Testing Your Contract",
            &[
                "Write tests to verify your contract functions work correctly",
                "Test both successful operations and edge cases",
                "Ensure your contract behaves as expected before deployment",
                "snforge provides a comprehensive testing framework for Cairo",
            ],
        ),
        LessonStep::new(
            "Create Account",
            "Create a new account using sncast to deploy your contracts.",
            "👤",
        )
        .with_command("sncast --profile sepolia account create --name hello-account")
        .with_notes(
            "Account Creation",
            &[
                "Creates a new account configuration locally",
                "Generates a public/private key pair",
                "Computes the account address deterministically",
                "Account is not yet deployed to the network",
            ],
        ),
        LessonStep::new(
            "Verify Account",
            "List your accounts to confirm the account was created successfully.",
            "✅",
        )
        .with_command("sncast --profile sepolia account list")
        .with_snippet("Account List", "yaml", ACCOUNT_LIST_OUTPUT)
        .with_notes(
            "Account Information",
            &[
                "deployed: false - Account contract not yet on-chain",
                "address - Where the account will be deployed",
                "public key - Used for signature verification",
                "class hash - OpenZeppelin account contract template",
            ],
        ),
        LessonStep::new(
            "Fund Account",
            "Add test tokens to your account address using the StarkNet faucet.",
            "💰",
        )
        .with_link("Open StarkNet Faucet", "https://faucet.starknet.io/")
        .with_notes(
            "Why You Need Test Tokens",
            &[
                "Account deployment requires gas fees",
                "Contract declaration and deployment cost ETH",
                "Test tokens are free on testnets like Sepolia",
                "You'll need tokens in your account address before deployment",
            ],
        ),
        LessonStep::new(
            "Deploy Account",
            "Deploy your account contract to the network before you can use it.",
            "🚀",
        )
        .with_command("sncast --profile sepolia account deploy --name hello-account")
        .with_notes(
            "Account Deployment",
            &[
                "Deploys your account contract to StarkNet",
                "Account becomes active and can send transactions",
                "Returns a transaction hash for the deployment",
                "Your account is now ready to deploy smart contracts!",
            ],
        ),
    ]
}

/// Steps of the first storage lesson. The first step hosts the demo.
pub fn storage_one_steps() -> Vec<LessonStep> {
    vec![
        LessonStep::new(
            "Interactive Demo",
            "Call add_two_numbers and watch the sum storage slot update.",
            "🎮",
        )
        .with_storage_demo(),
        LessonStep::new(
            "HelloContract Code",
            "This contract demonstrates basic storage operations by adding two numbers and storing the result.",
            "📝",
        )
        .with_snippet("HelloContract.cairo", "cairo", HELLO_CONTRACT)
        .with_notes(
            "Key Components",
            &[
                "Storage variable: sum: felt252 - stores the result",
                "Write operation: self.sum.write(sum_a_b) - saves the sum",
                "Read operation: self.sum.read() - retrieves the sum",
            ],
        ),
        LessonStep::new(
            "Storage Layout",
            "Starknet uses a hash function to determine storage addresses for each variable.",
            "🗂️",
        )
        .with_notes(
            "Storage Address Calculation",
            &[
                "storage_address = sn_keccak(\"sum\")",
                "sn_keccak is a Starknet variant of Keccak-256 that gives each storage variable a unique address",
            ],
        ),
        LessonStep::new(
            "Storage Syscalls",
            "Every storage read and write in Cairo translates to a system call that touches Starknet's state.",
            "⚙️",
        )
        .with_notes(
            "System Call Details",
            &[
                "storage_write_syscall: updates the contract's state in the Starknet storage tree",
                "storage_read_syscall: fetches the value stored at an address",
                "State changes: write operations create new state roots for the contract",
            ],
        ),
        LessonStep::new(
            "Patricia Merkle Tree",
            "Contract storage lives in a Patricia Merkle Tree whose root commits to every slot.",
            "🌳",
        )
        .with_notes(
            "How the Tree Changes",
            &[
                "Each write operation creates a new state root",
                "Only the path from leaf to root needs updating",
            ],
        ),
        LessonStep::new(
            "Deploy and Interact",
            "Declare the class, deploy it with constructor calldata, then call and invoke it with sncast.",
            "🚀",
        )
        .with_snippet("Terminal", "shell", SNCAST_SESSION),
        LessonStep::new(
            "Sequencer Processing",
            "What the Starknet sequencer does with a deploy transaction.",
            "🔄",
        )
        .with_notes(
            "Starknet Sequencer Processing",
            &[
                "Transaction Validation: sequencer validates deploy transaction signature and parameters",
                "Contract Instantiation: creates new contract instance with unique address and empty storage",
                "Storage Tree Creation: initializes Patricia Merkle Tree for contract storage",
                "State Root Update: updates global Starknet state with new contract",
                "Block Inclusion: includes deployment transaction in next block",
            ],
        ),
    ]
}
